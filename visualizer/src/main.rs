use anyhow::Context;
use clap::Parser;
use crccore::record::RawDetection;
use crccore::telemetry::{LogManager, MetricsRecorder};
use crccore::view::{available_months, ChartMode, Column, DashboardView};
use crccore::DashboardConfig;
use iced::{
    widget::{button, canvas::Canvas, column, pick_list, row, text, Container},
    Alignment, Element, Length, Task, Theme,
};
use std::fmt;
use std::path::PathBuf;

mod chart;
mod fetch;
mod table;

use chart::CarbonChart;
use table::{detection_table, FilterChoice};

#[derive(Parser)]
#[command(author, version, about = "CRC carbon-reduction dashboard")]
struct Args {
    /// Load endpoint/token settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the detection endpoint
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => DashboardConfig::load(&path)
            .with_context(|| format!("loading dashboard config {}", path.display()))?,
        None => DashboardConfig::default(),
    }
    .with_env_overrides();
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    iced::application(
        move || Dashboard::boot(config.clone()),
        Dashboard::update,
        Dashboard::view,
    )
    .title(application_title)
    .theme(application_theme)
    .run()
    .map_err(|err| anyhow::anyhow!("running dashboard: {err}"))
}

fn application_title(_: &Dashboard) -> String {
    "탄소배출 감소 데이터".into()
}

fn application_theme(_: &Dashboard) -> Theme {
    Theme::Dark
}

struct Dashboard {
    view: DashboardView,
    metrics: MetricsRecorder,
    logger: LogManager,
}

#[derive(Debug, Clone)]
enum Message {
    DetectionsFetched(Result<Vec<RawDetection>, String>),
    FilterSelected(Column, FilterChoice),
    ModeSelected(ChartMode),
    YearSelected(YearChoice),
    MonthSelected(MonthChoice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearChoice {
    Any,
    Year(i32),
}

impl fmt::Display for YearChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearChoice::Any => f.write_str("연도 선택"),
            YearChoice::Year(year) => write!(f, "{}", year),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonthChoice {
    Any,
    Month(u32),
}

impl fmt::Display for MonthChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthChoice::Any => f.write_str("월 선택"),
            MonthChoice::Month(month) => write!(f, "{}월", month),
        }
    }
}

impl Dashboard {
    fn new() -> Self {
        Dashboard {
            view: DashboardView::new(),
            metrics: MetricsRecorder::new(),
            logger: LogManager::new(),
        }
    }

    fn boot(config: DashboardConfig) -> (Self, Task<Message>) {
        LogManager::new().record(&format!("Fetching detections from {}", config.endpoint));
        (
            Dashboard::new(),
            Task::perform(
                async move {
                    fetch::fetch_detections(config)
                        .await
                        .map_err(|err| err.to_string())
                },
                Message::DetectionsFetched,
            ),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::DetectionsFetched(Ok(records)) => {
                match crccore::transform_records(&records) {
                    Ok(rows) => {
                        state.metrics.record_fetch(rows.len());
                        state
                            .logger
                            .record(&format!("Loaded {} detection rows", rows.len()));
                        state.view.load(rows);
                    }
                    Err(err) => {
                        state.metrics.record_failure();
                        log::error!("Error fetching data: {}", err);
                    }
                }
            }
            Message::DetectionsFetched(Err(err)) => {
                state.metrics.record_failure();
                log::error!("Error fetching data: {}", err);
            }
            Message::FilterSelected(column, choice) => {
                state.view.set_filter(column, choice.into_filter());
            }
            Message::ModeSelected(mode) => state.view.set_mode(mode),
            Message::YearSelected(choice) => state.view.select_year(match choice {
                YearChoice::Any => None,
                YearChoice::Year(year) => Some(year),
            }),
            Message::MonthSelected(choice) => state.view.select_month(match choice {
                MonthChoice::Any => None,
                MonthChoice::Month(month) => Some(month),
            }),
        }
        Task::none()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let scope = state.view.scope();

        let mode_button = |label: &'static str, mode: ChartMode| {
            let style: fn(&Theme, button::Status) -> button::Style = if scope.mode == mode {
                button::primary
            } else {
                button::secondary
            };
            button(text(label))
                .on_press(Message::ModeSelected(mode))
                .padding([8, 16])
                .style(style)
        };
        let modes = row![
            mode_button("연도별", ChartMode::Yearly),
            mode_button("월별", ChartMode::Monthly),
        ]
        .spacing(16);

        let mut years = vec![YearChoice::Any];
        years.extend(
            state
                .view
                .available_years()
                .iter()
                .map(|year| YearChoice::Year(*year)),
        );
        let selected_year = scope.year.map_or(YearChoice::Any, YearChoice::Year);
        let mut scope_pickers = row![pick_list(years, Some(selected_year), Message::YearSelected)]
            .spacing(12);
        if scope.mode == ChartMode::Monthly && scope.year.is_some() {
            let mut months = vec![MonthChoice::Any];
            months.extend(available_months().into_iter().map(MonthChoice::Month));
            let selected_month = scope.month.map_or(MonthChoice::Any, MonthChoice::Month);
            scope_pickers =
                scope_pickers.push(pick_list(months, Some(selected_month), Message::MonthSelected));
        }

        let chart = Canvas::new(CarbonChart::new(state.view.chart()))
            .width(Length::Fill)
            .height(Length::Fixed(300.0));

        let snapshot = state.metrics.snapshot();
        let status = text(format!(
            "{} / {} rows shown · fetches {} · failures {}",
            state.view.filtered_rows().len(),
            snapshot.records,
            snapshot.fetches,
            snapshot.failures
        ))
        .size(12);

        let layout = column![
            text("탄소배출 감소 데이터").size(26),
            modes,
            scope_pickers,
            chart,
            detection_table(&state.view),
            status,
        ]
        .spacing(16)
        .padding(24)
        .align_x(Alignment::Center)
        .max_width(1152);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }
}
