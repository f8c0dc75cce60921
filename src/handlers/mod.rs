pub mod assets_liabilities;
pub mod budget;
pub mod dashboard;
pub mod expenses;
pub mod income;
pub mod loans_leases;
pub mod savings;

use serde::Serialize;

pub use dashboard::{dashboard, loan_lease_progress, DateRangeQuery};

/// View context for a list page. `editing` carries the record shown in the edit
/// form when the page is opened through an edit route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<T, E = T> {
    pub title: &'static str,
    pub records: Vec<T>,
    pub editing: Option<E>,
}

impl<T, E> ListView<T, E> {
    pub fn new(title: &'static str, records: Vec<T>) -> Self {
        Self {
            title,
            records,
            editing: None,
        }
    }

    pub fn editing(mut self, record: E) -> Self {
        self.editing = Some(record);
        self
    }
}
