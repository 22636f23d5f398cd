use crate::Message;
use crccore::view::ChartPoint;
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke},
    Color, Pixels, Point, Rectangle, Renderer, Theme,
};

const MARGIN_LEFT: f32 = 52.0;
const MARGIN_BOTTOM: f32 = 28.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_RIGHT: f32 = 16.0;
const GRID_LINES: usize = 4;

/// Line chart of carbon reduction per detection, labelled by date.
#[derive(Clone)]
pub struct CarbonChart {
    points: Vec<ChartPoint>,
}

impl CarbonChart {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        Self { points }
    }
}

/// Y-axis range over the finite totals, always including zero.
fn value_range(points: &[ChartPoint]) -> (f64, f64) {
    let finite = points.iter().map(|p| p.total).filter(|v| v.is_finite());
    let (min, max) = finite.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if (max - min).abs() < f64::EPSILON {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

fn axis_label(content: String, position: Point) -> canvas::Text {
    canvas::Text {
        content,
        position,
        color: Color::from_rgb(0.6, 0.6, 0.65),
        size: Pixels(11.0),
        ..canvas::Text::default()
    }
}

impl canvas::Program<Message> for CarbonChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.07),
        );

        let plot_width = (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let (min, max) = value_range(&self.points);
        let to_y = |value: f64| {
            let normalized = ((value - min) / (max - min)) as f32;
            MARGIN_TOP + plot_height - normalized * plot_height
        };

        let grid_stroke = Stroke {
            line_dash: LineDash {
                segments: &[3.0, 3.0],
                offset: 0,
            },
            ..Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgb(0.25, 0.25, 0.3))
        };
        for line in 0..=GRID_LINES {
            let value = min + (max - min) * line as f64 / GRID_LINES as f64;
            let y = to_y(value);
            let grid = Path::line(
                Point::new(MARGIN_LEFT, y),
                Point::new(MARGIN_LEFT + plot_width, y),
            );
            frame.stroke(&grid, grid_stroke.clone());
            frame.fill_text(axis_label(format!("{:.2}", value), Point::new(4.0, y - 6.0)));
        }

        if self.points.is_empty() {
            return vec![frame.into_geometry()];
        }

        let step = if self.points.len() > 1 {
            plot_width / (self.points.len() as f32 - 1.0)
        } else {
            0.0
        };
        let to_x = |index: usize| MARGIN_LEFT + index as f32 * step;

        // NaN totals break the line, as a gap.
        let line = Path::new(|builder| {
            let mut pen_down = false;
            for (index, point) in self.points.iter().enumerate() {
                if !point.total.is_finite() {
                    pen_down = false;
                    continue;
                }
                let position = Point::new(to_x(index), to_y(point.total));
                if pen_down {
                    builder.line_to(position);
                } else {
                    builder.move_to(position);
                    pen_down = true;
                }
            }
        });
        frame.stroke(
            &line,
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgb8(0x88, 0x84, 0xd8)),
        );

        for (index, point) in self.points.iter().enumerate() {
            if point.total.is_finite() {
                let marker = Path::circle(Point::new(to_x(index), to_y(point.total)), 2.5);
                frame.fill(&marker, Color::from_rgb8(0x88, 0x84, 0xd8));
            }
        }

        let label_y = MARGIN_TOP + plot_height + 8.0;
        let last = self.points.len() - 1;
        let mut label_indices = vec![0, last / 2, last];
        label_indices.dedup();
        for index in label_indices {
            let x = (to_x(index) - 30.0).min(bounds.width - 64.0).max(0.0);
            frame.fill_text(axis_label(
                self.points[index].label.clone(),
                Point::new(x, label_y),
            ));
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(total: f64) -> ChartPoint {
        ChartPoint {
            label: "2024-01-01".into(),
            total,
        }
    }

    #[test]
    fn range_includes_zero_and_skips_nan() {
        assert_eq!(value_range(&[point(2.0), point(f64::NAN), point(5.0)]), (0.0, 5.0));
        assert_eq!(value_range(&[point(-1.5), point(0.5)]), (-1.5, 0.5));
    }

    #[test]
    fn flat_series_gets_unit_range() {
        assert_eq!(value_range(&[]), (0.0, 1.0));
        assert_eq!(value_range(&[point(0.0)]), (0.0, 1.0));
    }
}
