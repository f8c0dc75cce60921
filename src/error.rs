//! Error type shared by the service layer and the HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("startDate {start} must be before endDate {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("stored value {0:?} is not a valid amount")]
    CorruptValue(String),

    #[error("amount arithmetic overflowed")]
    AmountOverflow,
}

/// Row decoders report unparseable amounts as a column decode error wrapping
/// `CorruptValue`; unwrap it so both read paths fail the same way.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { index, source } => match source.downcast::<AppError>() {
                Ok(inner) => *inner,
                Err(source) => Self::Database(sqlx::Error::ColumnDecode { index, source }),
            },
            other => Self::Database(other),
        }
    }
}

impl AppError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} record not found"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_)
            | Self::InvalidDateRange { .. }
            | Self::CorruptValue(_)
            | Self::AmountOverflow => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::NotFound(message) => message.clone(),
            Self::InvalidDateRange { .. } => format!("Server error: {self}"),
            Self::Database(_) | Self::CorruptValue(_) | Self::AmountOverflow => {
                "Server error: unable to complete request".to_string()
            }
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::not_found("Expense");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Expense record not found");
    }

    #[test]
    fn store_failures_map_to_500() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, AppError::Database(_)));

        let err = AppError::CorruptValue("12,5".to_string());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn corrupt_column_decode_becomes_corrupt_value() {
        let err = AppError::from(sqlx::Error::ColumnDecode {
            index: "amount".to_string(),
            source: Box::new(AppError::CorruptValue("12,5".to_string())),
        });
        assert!(matches!(err, AppError::CorruptValue(ref raw) if raw == "12,5"));
    }

    #[test]
    fn overflow_maps_to_500() {
        let response = AppError::AmountOverflow.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn inverted_range_message_names_both_dates() {
        let err = AppError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2024-03-01"));
        assert!(msg.contains("2024-01-01"));
    }
}
