use axum::{
    extract::{Path, State},
    response::{Json, Redirect},
    Form,
};

use super::ListView;
use crate::error::AppError;
use crate::models::{AssetsLiabilities, AssetsLiabilitiesForm, SnapshotId, SnapshotRow};
use crate::services::assets_liabilities;
use crate::AppState;

const TITLE: &str = "Assets & Liabilities";

type SnapshotsView = ListView<SnapshotRow, AssetsLiabilities>;

async fn rows(state: &AppState) -> Result<Vec<SnapshotRow>, AppError> {
    let snapshots = assets_liabilities::list(&state.db_pool).await?;
    snapshots.into_iter().map(SnapshotRow::try_from).collect()
}

pub async fn list_snapshots(State(state): State<AppState>) -> Result<Json<SnapshotsView>, AppError> {
    Ok(Json(ListView::new(TITLE, rows(&state).await?)))
}

pub async fn edit_snapshot_view(
    State(state): State<AppState>,
    Path(id): Path<SnapshotId>,
) -> Result<Json<SnapshotsView>, AppError> {
    let record = assets_liabilities::get(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Assets & Liabilities"))?;
    Ok(Json(ListView::new(TITLE, rows(&state).await?).editing(record)))
}

pub async fn create_snapshot(
    State(state): State<AppState>,
    Form(form): Form<AssetsLiabilitiesForm>,
) -> Result<Redirect, AppError> {
    assets_liabilities::insert(&state.db_pool, &form).await?;
    Ok(Redirect::to("/assets-liabilities"))
}

pub async fn update_snapshot(
    State(state): State<AppState>,
    Path(id): Path<SnapshotId>,
    Form(form): Form<AssetsLiabilitiesForm>,
) -> Result<Redirect, AppError> {
    assets_liabilities::update(&state.db_pool, id, &form).await?;
    Ok(Redirect::to("/assets-liabilities"))
}

pub async fn delete_snapshot(
    State(state): State<AppState>,
    Path(id): Path<SnapshotId>,
) -> Result<Redirect, AppError> {
    assets_liabilities::delete(&state.db_pool, id).await?;
    Ok(Redirect::to("/assets-liabilities"))
}
