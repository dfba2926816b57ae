//! Chart Component
//!
//! Line and bar charts over a labelled series, drawn on an HTML5 Canvas.
//! Geometry is computed by [`layout`] and only painted by [`draw_chart`].

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::types::SeriesPoint;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Horizontal grid lines / y-axis ticks
const Y_TICKS: usize = 5;

/// Share of a category slot a bar occupies
const BAR_FILL: f64 = 0.6;

const SERIES_COLOR: &str = "#8884d8";
const GRID_COLOR: &str = "#e5e7eb"; // gray-200
const LABEL_COLOR: &str = "#6b7280"; // gray-500

/// How a series is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// One plotted value, in canvas coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Centre of the category slot
    pub x: f64,
    /// Top of the bar, or the line vertex
    pub y: f64,
    /// Bar width; zero for line charts
    pub width: f64,
    /// Distance from `y` down to the baseline
    pub height: f64,
}

/// Everything needed to paint a chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub marks: Vec<Mark>,
    /// (canvas y, label) per horizontal grid line, top to bottom
    pub y_ticks: Vec<(f64, String)>,
    /// (canvas x, label) per category
    pub x_labels: Vec<(f64, String)>,
}

impl ChartLayout {
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Compute chart geometry for `points` on a `width` x `height` canvas.
///
/// The value axis always includes zero so bars have a baseline. Any input,
/// including an empty series, produces a layout.
pub fn layout(points: &[SeriesPoint], kind: ChartKind, width: f64, height: f64) -> ChartLayout {
    let chart_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
    let chart_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);

    let (y_min, y_max) = value_domain(points);
    let scale_y = |value: f64| MARGIN_TOP + ((y_max - value) / (y_max - y_min)) * chart_height;
    let baseline = scale_y(0.0);

    let y_ticks = (0..=Y_TICKS)
        .map(|i| {
            let fraction = i as f64 / Y_TICKS as f64;
            let value = y_max - fraction * (y_max - y_min);
            (MARGIN_TOP + fraction * chart_height, format_tick(value))
        })
        .collect();

    let slot = if points.is_empty() {
        0.0
    } else {
        chart_width / points.len() as f64
    };

    let mut marks = Vec::with_capacity(points.len());
    let mut x_labels = Vec::with_capacity(points.len());

    for (i, point) in points.iter().enumerate() {
        let x = MARGIN_LEFT + (i as f64 + 0.5) * slot;
        let y = scale_y(point.value);

        let mark = match kind {
            ChartKind::Line => Mark {
                x,
                y,
                width: 0.0,
                height: 0.0,
            },
            // Negative values hang below the baseline
            ChartKind::Bar => Mark {
                x,
                y: y.min(baseline),
                width: slot * BAR_FILL,
                height: (baseline - y).abs(),
            },
        };

        marks.push(mark);
        x_labels.push((x, point.name.clone()));
    }

    ChartLayout {
        marks,
        y_ticks,
        x_labels,
    }
}

/// Value axis bounds: always spans zero, padded 10% past the extremes
fn value_domain(points: &[SeriesPoint]) -> (f64, f64) {
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;

    for point in points.iter().filter(|p| p.value.is_finite()) {
        min = min.min(point.value);
        max = max.max(point.value);
    }

    let padding = (max - min) * 0.1;
    let (min, max) = (
        if min < 0.0 { min - padding } else { min },
        max + padding,
    );

    if max == min {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 100.0 || value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Chart of a single labelled series
#[component]
pub fn Chart(
    data: Vec<SeriesPoint>,
    kind: ChartKind,
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &data, kind);
        }
    });

    view! {
        <div class="w-full">
            {title.map(|title| view! { <h2 class="mb-4 text-lg font-bold">{title}</h2> })}
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="h-[300px] w-full"
            />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, data: &[SeriesPoint], kind: ChartKind) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart = layout(data, kind, width, height);

    ctx.clear_rect(0.0, 0.0, width, height);

    // Grid and value axis
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");

    for (y, label) in &chart.y_ticks {
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, *y);
        ctx.line_to(width - MARGIN_RIGHT, *y);
        ctx.stroke();
        let _ = ctx.fill_text(label, 5.0, y + 4.0);
    }

    if chart.is_empty() {
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 28.0, height / 2.0);
        return;
    }

    // Category axis
    ctx.set_text_align("center");
    for (x, label) in &chart.x_labels {
        let _ = ctx.fill_text(label, *x, height - 15.0);
    }
    ctx.set_text_align("start");

    ctx.set_fill_style(&SERIES_COLOR.into());
    ctx.set_stroke_style(&SERIES_COLOR.into());

    match kind {
        ChartKind::Bar => {
            for mark in &chart.marks {
                ctx.fill_rect(mark.x - mark.width / 2.0, mark.y, mark.width, mark.height);
            }
        }
        ChartKind::Line => {
            ctx.set_line_width(2.0);
            ctx.begin_path();
            for (i, mark) in chart.marks.iter().enumerate() {
                if i == 0 {
                    ctx.move_to(mark.x, mark.y);
                } else {
                    ctx.line_to(mark.x, mark.y);
                }
            }
            ctx.stroke();

            for mark in &chart.marks {
                ctx.begin_path();
                let _ = ctx.arc(mark.x, mark.y, 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<SeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| SeriesPoint {
                name: format!("{:02}:00", i),
                value,
            })
            .collect()
    }

    #[test]
    fn test_empty_series_has_no_marks() {
        for kind in [ChartKind::Line, ChartKind::Bar] {
            let chart = layout(&[], kind, 800.0, 300.0);
            assert!(chart.is_empty());
            assert!(chart.x_labels.is_empty());
            assert_eq!(chart.y_ticks.len(), Y_TICKS + 1);
        }
    }

    #[test]
    fn test_one_mark_per_point_in_order() {
        let points = series(&[10.0, 30.0, 20.0]);
        let chart = layout(&points, ChartKind::Line, 800.0, 300.0);

        assert_eq!(chart.marks.len(), 3);
        assert!(chart.marks.windows(2).all(|w| w[0].x < w[1].x));
        assert_eq!(chart.x_labels[2].1, "02:00");
        // Higher values sit higher on the canvas
        assert!(chart.marks[1].y < chart.marks[2].y);
        assert!(chart.marks[2].y < chart.marks[0].y);
    }

    #[test]
    fn test_marks_stay_inside_plot_area() {
        let points = series(&[0.0, 5.0, 100.0]);
        let chart = layout(&points, ChartKind::Bar, 800.0, 300.0);

        for mark in &chart.marks {
            assert!(mark.x >= MARGIN_LEFT && mark.x <= 800.0 - MARGIN_RIGHT);
            assert!(mark.y >= MARGIN_TOP);
            assert!(mark.y + mark.height <= 300.0 - MARGIN_BOTTOM + 1e-9);
        }
    }

    #[test]
    fn test_bars_rest_on_zero_baseline() {
        let points = series(&[4.0, 8.0]);
        let chart = layout(&points, ChartKind::Bar, 800.0, 300.0);

        let bottom_a = chart.marks[0].y + chart.marks[0].height;
        let bottom_b = chart.marks[1].y + chart.marks[1].height;
        assert!((bottom_a - bottom_b).abs() < 1e-9);
        assert!(chart.marks[1].height > chart.marks[0].height);
        assert!(chart.marks[0].width > 0.0);
    }

    #[test]
    fn test_negative_bar_hangs_below_baseline() {
        let points = series(&[5.0, -5.0]);
        let chart = layout(&points, ChartKind::Bar, 800.0, 300.0);

        let baseline = chart.marks[0].y + chart.marks[0].height;
        assert!((chart.marks[1].y - baseline).abs() < 1e-9);
        assert!(chart.marks[1].height > 0.0);
    }

    #[test]
    fn test_flat_zero_series_does_not_divide_by_zero() {
        let points = series(&[0.0, 0.0]);
        let chart = layout(&points, ChartKind::Line, 800.0, 300.0);

        assert!(chart.marks.iter().all(|m| m.y.is_finite()));
    }

    #[test]
    fn test_y_ticks_descend() {
        let chart = layout(&series(&[50.0]), ChartKind::Line, 800.0, 300.0);

        assert_eq!(chart.y_ticks.first().unwrap().1, "55");
        assert_eq!(chart.y_ticks.last().unwrap().1, "0");
    }
}
