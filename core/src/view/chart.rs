use crate::record::DetectionRow;
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ChartMode {
    #[default]
    Yearly,
    Monthly,
}

/// Year/month restriction applied to the chart series only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartScope {
    pub mode: ChartMode,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl ChartScope {
    pub fn includes(&self, row: &DetectionRow) -> bool {
        let date = row.timestamp.date();
        match (self.mode, self.year, self.month) {
            (ChartMode::Yearly, Some(year), _) => date.year() == year,
            (ChartMode::Monthly, Some(year), Some(month)) => {
                date.year() == year && date.month() == month
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// `YYYY-MM-DD`
    pub label: String,
    pub total: f64,
}

/// One point per in-scope row, keeping row order.
pub fn chart_series(rows: &[DetectionRow], scope: &ChartScope) -> Vec<ChartPoint> {
    rows.iter()
        .filter(|row| scope.includes(row))
        .map(|row| ChartPoint {
            label: row.date.clone(),
            total: row.carbon_total(),
        })
        .collect()
}

/// Distinct years present in the data, newest first.
pub fn available_years(rows: &[DetectionRow]) -> Vec<i32> {
    let mut years: Vec<i32> = rows.iter().map(|row| row.timestamp.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

pub fn available_months() -> Vec<u32> {
    (1..=12).collect()
}
