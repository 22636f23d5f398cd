use serde::Serialize;

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Column {
    DayOfWeek,
    BottleType,
    Recyclable,
    VideoName,
    TotalCount,
    Date,
    Time,
    TotalCarbonReduction,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::DayOfWeek,
        Column::BottleType,
        Column::Recyclable,
        Column::VideoName,
        Column::TotalCount,
        Column::Date,
        Column::Time,
        Column::TotalCarbonReduction,
    ];

    /// Header text; may contain a line break.
    pub fn label(self) -> &'static str {
        match self {
            Column::DayOfWeek => "요일",
            Column::BottleType => "병 종류",
            Column::Recyclable => "재활용 여부",
            Column::VideoName => "비디오 이름",
            Column::TotalCount => "총 개수",
            Column::Date => "날짜",
            Column::Time => "시간",
            Column::TotalCarbonReduction => "탄소 배출\n감소량",
        }
    }

    pub fn filterable(self) -> bool {
        !matches!(
            self,
            Column::TotalCount | Column::Date | Column::TotalCarbonReduction
        )
    }

    pub fn filterable_columns() -> impl Iterator<Item = Column> {
        Column::ALL.into_iter().filter(|column| column.filterable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_date_columns_are_not_filterable() {
        let filterable: Vec<_> = Column::filterable_columns().collect();
        assert_eq!(
            filterable,
            vec![
                Column::DayOfWeek,
                Column::BottleType,
                Column::Recyclable,
                Column::VideoName,
                Column::Time,
            ]
        );
    }

    #[test]
    fn carbon_header_spans_two_lines() {
        assert_eq!(Column::TotalCarbonReduction.label().lines().count(), 2);
    }
}
