//! Date handling: serde helpers for chrono dates, dashboard date ranges and month keys.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MONTH_FORMAT: &str = "%Y-%m";

/// Serialize NaiveDate as "YYYY-MM-DD". Used with #[serde(with = "crate::utils::date")].
pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.format(DATE_FORMAT).to_string().serialize(serializer)
}

/// Deserialize NaiveDate from "YYYY-MM-DD" string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(serde::de::Error::custom)
}

/// Optional dates. Null or an empty form field both mean "no date".
pub mod opt {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        date.map(|d| d.format(DATE_FORMAT).to_string())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<String>::deserialize(deserializer)?;
        match opt.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Strict "YYYY-MM-DD": exactly ten characters and a real calendar day.
pub fn parse_strict(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Today in the server's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_FORMAT).to_string()
}

/// Validate a "YYYY-MM" month key.
pub fn parse_month(s: &str) -> Option<String> {
    let s = s.trim();
    if s.len() != 7 {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{s}-01"), DATE_FORMAT)
        .ok()
        .map(month_key)
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(with = "crate::utils::date")]
    pub start_date: NaiveDate,
    #[serde(with = "crate::utils::date")]
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, AppError> {
        if start_date > end_date {
            return Err(AppError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// From the first day of the month `months_back` months ago through today.
    pub fn trailing(today: NaiveDate, months_back: u32) -> Self {
        let start_date = today
            .checked_sub_months(Months::new(months_back))
            .and_then(|d| d.with_day(1))
            .unwrap_or(today);
        Self {
            start_date,
            end_date: today,
        }
    }

    /// Resolve query parameters. Missing or malformed bounds fall back to the
    /// trailing window; an inverted range is an error.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
        months_back: u32,
    ) -> Result<Self, AppError> {
        match (start.and_then(parse_strict), end.and_then(parse_strict)) {
            (Some(start_date), Some(end_date)) => Self::new(start_date, end_date),
            _ => Ok(Self::trailing(today, months_back)),
        }
    }

    /// Every calendar month touched by the range, oldest first.
    pub fn months(&self) -> Vec<String> {
        let last = (self.end_date.year(), self.end_date.month());
        let mut months = Vec::new();
        let mut cursor = self.start_date.with_day(1);
        while let Some(month) = cursor {
            if (month.year(), month.month()) > last {
                break;
            }
            months.push(month_key(month));
            cursor = month.checked_add_months(Months::new(1));
        }
        months
    }
}
