use crate::record::DetectionRow;
use crate::view::columns::Column;
use std::collections::BTreeMap;

/// Per-column equality filters; all set filters must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFilters {
    selected: BTreeMap<Column, String>,
}

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears a filter. An empty value clears it.
    pub fn set(&mut self, column: Column, value: Option<String>) {
        match value.filter(|value| !value.is_empty()) {
            Some(value) => {
                self.selected.insert(column, value);
            }
            None => {
                self.selected.remove(&column);
            }
        }
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.selected.get(&column).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn matches(&self, row: &DetectionRow) -> bool {
        self.selected
            .iter()
            .all(|(column, value)| row.cell(*column) == *value)
    }

    pub fn apply(&self, rows: &[DetectionRow]) -> Vec<DetectionRow> {
        rows.iter()
            .filter(|row| self.matches(row))
            .cloned()
            .collect()
    }
}

/// Distinct values of a column, in first-seen order.
pub fn column_options(rows: &[DetectionRow], column: Column) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for row in rows {
        let value = row.cell(column);
        if !options.contains(&value) {
            options.push(value);
        }
    }
    options
}
