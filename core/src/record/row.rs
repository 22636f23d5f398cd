use crate::transform::bottle::BottleType;
use crate::view::columns::Column;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Recyclability token shown in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Recyclability {
    Recyclable,
    NotRecyclable,
}

impl Recyclability {
    pub fn label(self) -> &'static str {
        match self {
            Recyclability::Recyclable => "가능",
            Recyclability::NotRecyclable => "불가능",
        }
    }
}

impl fmt::Display for Recyclability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation copy of a detection record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionRow {
    /// Sender's wall clock; drives the date/time columns and chart scope.
    pub timestamp: NaiveDateTime,
    /// Absolute instant; drives ordering.
    pub instant: DateTime<Utc>,
    pub day_of_week: String,
    pub bottle_type: Option<BottleType>,
    pub recyclable: Recyclability,
    pub video_name: String,
    pub total_count: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// Carbon reduction rounded to two decimals.
    pub total_carbon_reduction: String,
}

impl DetectionRow {
    /// String form of a column, used both for display and filter matching.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::DayOfWeek => self.day_of_week.clone(),
            Column::BottleType => self
                .bottle_type
                .map(|bottle| bottle.label().to_string())
                .unwrap_or_default(),
            Column::Recyclable => self.recyclable.label().to_string(),
            Column::VideoName => self.video_name.clone(),
            Column::TotalCount => self.total_count.clone(),
            Column::Date => self.date.clone(),
            Column::Time => self.time.clone(),
            Column::TotalCarbonReduction => self.total_carbon_reduction.clone(),
        }
    }

    /// Chart value, read back from the rounded string.
    pub fn carbon_total(&self) -> f64 {
        self.total_carbon_reduction.parse().unwrap_or(f64::NAN)
    }
}
