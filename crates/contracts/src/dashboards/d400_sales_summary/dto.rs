use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days covered by the default summary range, ending today
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

pub const ALL_STORES_LABEL: &str = "All Stores";
pub const PLACEHOLDER_LABEL: &str = "Selected Store";
pub const SERIES_LABEL: &str = "Total Tons";

/// One row of `GET /sales/totalTons`: tons sold by a store over the range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub total_tons: f64,
    pub store_id: i64,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub store_city: Option<String>,
    #[serde(default)]
    pub store_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub content: Option<Vec<SummaryRecord>>,
}

impl SummaryResponse {
    /// Rows of the response; a missing `content` is the same as an empty one
    pub fn rows(self) -> Vec<SummaryRecord> {
        self.content.unwrap_or_default()
    }
}

pub fn aggregate_total_tons(rows: &[SummaryRecord]) -> f64 {
    rows.iter().map(|r| r.total_tons).sum()
}

/// Bar chart input: one label per bar plus the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub label: String,
    pub data: Vec<f64>,
}

impl ChartSeries {
    /// Chart shown before any data has been loaded or when nothing matched
    pub fn placeholder() -> Self {
        Self {
            labels: vec![PLACEHOLDER_LABEL.to_string()],
            label: SERIES_LABEL.to_string(),
            data: vec![0.0],
        }
    }

    pub fn all_stores(total: f64) -> Self {
        Self {
            labels: vec![ALL_STORES_LABEL.to_string()],
            label: SERIES_LABEL.to_string(),
            data: vec![total],
        }
    }

    /// Series for a set of summary rows: empty rows fall back to the placeholder
    pub fn from_rows(rows: &[SummaryRecord]) -> Self {
        if rows.is_empty() {
            Self::placeholder()
        } else {
            Self::all_stores(aggregate_total_tons(rows))
        }
    }

    /// Largest value in the series, used to scale the bars
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Please select a start date and end date.")]
    Incomplete,
}

/// Date range picked on a summary screen. Either end may still be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SummaryRange {
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            start: Some(today - Duration::days(DEFAULT_LOOKBACK_DAYS)),
            end: Some(today),
        }
    }

    pub fn bounds(&self) -> Result<(NaiveDate, NaiveDate), RangeError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(RangeError::Incomplete),
        }
    }

    /// Query parameters for `GET /sales/totalTons`, dates as `yyyy-MM-dd`
    pub fn query_params(
        &self,
        page: usize,
        size: usize,
    ) -> Result<Vec<(&'static str, String)>, RangeError> {
        let (start, end) = self.bounds()?;
        Ok(vec![
            ("startDate", start.format("%Y-%m-%d").to_string()),
            ("endDate", end.format("%Y-%m-%d").to_string()),
            ("page", page.to_string()),
            ("size", size.to_string()),
        ])
    }
}
