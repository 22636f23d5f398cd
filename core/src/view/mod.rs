pub mod chart;
pub mod columns;
pub mod filter;

pub use chart::{available_months, available_years, chart_series, ChartMode, ChartPoint, ChartScope};
pub use columns::Column;
pub use filter::{column_options, ColumnFilters};

use crate::record::DetectionRow;

/// Local view state: the fetched rows plus the user's filter and chart choices.
///
/// `rows` is never mutated after `load`; everything else is derived.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    rows: Vec<DetectionRow>,
    filtered: Vec<DetectionRow>,
    filters: ColumnFilters,
    scope: ChartScope,
    years: Vec<i32>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the data set, e.g. after the initial fetch.
    pub fn load(&mut self, rows: Vec<DetectionRow>) {
        self.years = available_years(&rows);
        self.rows = rows;
        self.refilter();
    }

    pub fn rows(&self) -> &[DetectionRow] {
        &self.rows
    }

    pub fn filtered_rows(&self) -> &[DetectionRow] {
        &self.filtered
    }

    pub fn filters(&self) -> &ColumnFilters {
        &self.filters
    }

    pub fn set_filter(&mut self, column: Column, value: Option<String>) {
        self.filters.set(column, value);
        self.refilter();
    }

    pub fn options(&self, column: Column) -> Vec<String> {
        column_options(&self.rows, column)
    }

    pub fn scope(&self) -> ChartScope {
        self.scope
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        self.scope.mode = mode;
    }

    pub fn select_year(&mut self, year: Option<i32>) {
        self.scope.year = year;
    }

    pub fn select_month(&mut self, month: Option<u32>) {
        self.scope.month = month;
    }

    pub fn available_years(&self) -> &[i32] {
        &self.years
    }

    pub fn chart(&self) -> Vec<ChartPoint> {
        chart_series(&self.filtered, &self.scope)
    }

    fn refilter(&mut self) {
        self.filtered = self.filters.apply(&self.rows);
    }
}
