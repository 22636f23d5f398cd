use crate::Message;
use crccore::record::DetectionRow;
use crccore::view::{Column, DashboardView};
use iced::{
    widget::{column, container, pick_list, scrollable, text, Column as ColumnWidget, Row},
    Background, Color, Element, Length, Theme,
};
use std::fmt;

const BODY_HEIGHT: f32 = 384.0;

/// Entry of a header filter dropdown; `Any` shows the column label.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChoice {
    Any(Column),
    Value(String),
}

impl FilterChoice {
    pub fn into_filter(self) -> Option<String> {
        match self {
            FilterChoice::Any(_) => None,
            FilterChoice::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChoice::Any(column) => f.write_str(&column.label().replace('\n', " ")),
            FilterChoice::Value(value) => f.write_str(value),
        }
    }
}

fn portion(column: Column) -> u16 {
    match column {
        Column::VideoName => 3,
        Column::BottleType | Column::TotalCarbonReduction => 2,
        _ => 1,
    }
}

fn header_cell(view: &DashboardView, column: Column) -> Element<'_, Message> {
    let cell: Element<'_, Message> = if column.filterable() {
        let mut options = vec![FilterChoice::Any(column)];
        options.extend(view.options(column).into_iter().map(FilterChoice::Value));
        let selected = match view.filters().get(column) {
            Some(value) => FilterChoice::Value(value.to_string()),
            None => FilterChoice::Any(column),
        };
        pick_list(options, Some(selected), move |choice: FilterChoice| {
            Message::FilterSelected(column, choice)
        })
        .text_size(13)
        .width(Length::Fill)
        .into()
    } else {
        column
            .label()
            .lines()
            .fold(ColumnWidget::new(), |col, line| col.push(text(line).size(13)))
            .into()
    };
    container(cell)
        .padding(4)
        .width(Length::FillPortion(portion(column)))
        .into()
}

fn body_row(row: &DetectionRow, index: usize) -> Element<'_, Message> {
    let cells = Column::ALL.into_iter().fold(Row::new(), |cells, column| {
        cells.push(
            container(text(row.cell(column)).size(13))
                .padding(4)
                .width(Length::FillPortion(portion(column))),
        )
    });
    let shade = if index % 2 == 0 {
        Color::from_rgb(0.12, 0.12, 0.14)
    } else {
        Color::from_rgb(0.17, 0.17, 0.2)
    };
    container(cells)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(shade)),
            ..container::Style::default()
        })
        .into()
}

/// Header with per-column filters above a scrolling, striped body.
pub fn detection_table(view: &DashboardView) -> Element<'_, Message> {
    let header = Column::ALL
        .into_iter()
        .fold(Row::new(), |header, column| {
            header.push(header_cell(view, column))
        })
        .width(Length::Fill);

    let body = if view.filtered_rows().is_empty() {
        ColumnWidget::new().push(text("데이터 없음").size(13))
    } else {
        view.filtered_rows()
            .iter()
            .enumerate()
            .fold(ColumnWidget::new(), |body, (index, row)| {
                body.push(body_row(row, index))
            })
    };

    column![
        header,
        scrollable(body).height(Length::Fixed(BODY_HEIGHT)),
    ]
    .spacing(4)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_choice_shows_single_line_label() {
        assert_eq!(
            FilterChoice::Any(Column::TotalCarbonReduction).to_string(),
            "탄소 배출 감소량"
        );
        assert_eq!(FilterChoice::Any(Column::DayOfWeek).into_filter(), None);
        assert_eq!(
            FilterChoice::Value("월요일".into()).into_filter().as_deref(),
            Some("월요일")
        );
    }
}
