//! Read length histogram drawn as an inline SVG bar chart.

use leptos::*;

use crate::format::HistogramSeries;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 260.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 34.0;

/// Geometry of a single bar, in SVG user units.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay the bars out left to right, scaled to the tallest one.
pub fn layout_bars(series: &HistogramSeries, width: f64, height: f64) -> Vec<Bar> {
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max_value = series.max_value();
    let bar_w = if series.is_empty() {
        1.0
    } else {
        plot_w / series.len() as f64
    };

    series
        .categories
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(i, (label, &value))| {
            let bar_h = if max_value == 0 {
                0.0
            } else {
                value as f64 / max_value as f64 * plot_h
            };
            Bar {
                label: label.clone(),
                value,
                x: MARGIN_LEFT + i as f64 * bar_w,
                y: MARGIN_TOP + plot_h - bar_h,
                width: bar_w.max(1.0),
                height: bar_h,
            }
        })
        .collect()
}

#[component]
pub fn HistogramChart(series: HistogramSeries) -> impl IntoView {
    let bars = layout_bars(&series, CHART_WIDTH, CHART_HEIGHT);
    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let axis_y = MARGIN_TOP + plot_h;
    let tick_x = MARGIN_LEFT - 6.0;
    let max_tick_y = MARGIN_TOP + 4.0;
    let label_y = axis_y + 14.0;
    let caption_x = MARGIN_LEFT + plot_w / 2.0;
    let caption_y = CHART_HEIGHT - 4.0;
    let max_value = series.max_value();

    view! {
        <div class="plot">
            <svg
                width=CHART_WIDTH
                height=CHART_HEIGHT
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            >
                <rect x=MARGIN_LEFT y=MARGIN_TOP width=plot_w height=plot_h fill="#fff" stroke="#ddd"/>
                <text x=tick_x y=max_tick_y text-anchor="end" font-size="11">{max_value}</text>
                <text x=tick_x y=axis_y text-anchor="end" font-size="11">"0"</text>
                {bars
                    .into_iter()
                    .map(|bar| {
                        let label_x = bar.x + bar.width / 2.0;
                        view! {
                            <g class="bar">
                                <rect x=bar.x y=bar.y width=bar.width height=bar.height fill="#7db8da"/>
                                <text x=label_x y=label_y text-anchor="middle" font-size="10">
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
                <text x=caption_x y=caption_y text-anchor="middle" font-size="12">"Read length"</text>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&str, u64)]) -> HistogramSeries {
        HistogramSeries {
            categories: pairs.iter().map(|(c, _)| c.to_string()).collect(),
            values: pairs.iter().map(|(_, v)| *v).collect(),
        }
    }

    #[test]
    fn test_bars_follow_category_order() {
        let bars = layout_bars(&series(&[("50", 10), ("100", 5)]), CHART_WIDTH, CHART_HEIGHT);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "50");
        assert_eq!(bars[1].label, "100");
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn test_tallest_bar_fills_plot() {
        let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let bars = layout_bars(&series(&[("50", 10), ("100", 5)]), CHART_WIDTH, CHART_HEIGHT);

        assert_eq!(bars[0].height, plot_h);
        assert_eq!(bars[0].y, MARGIN_TOP);
        assert_eq!(bars[1].height, plot_h / 2.0);
    }

    #[test]
    fn test_all_zero_counts_draw_flat_bars() {
        let bars = layout_bars(&series(&[("50", 0)]), CHART_WIDTH, CHART_HEIGHT);
        assert_eq!(bars[0].height, 0.0);
    }

    #[test]
    fn test_empty_series_has_no_bars() {
        assert!(layout_bars(&HistogramSeries::default(), CHART_WIDTH, CHART_HEIGHT).is_empty());
    }
}
