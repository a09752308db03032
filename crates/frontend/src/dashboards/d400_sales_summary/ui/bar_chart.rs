use crate::shared::format::format_tons;
use contracts::dashboards::d400_sales_summary::ChartSeries;
use leptos::prelude::*;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 40.0;
const TICKS: usize = 4;

const BAR_FILL: &str = "rgba(227, 30, 36, 0.6)";
const BAR_STROKE: &str = "rgb(196, 25, 32)";

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Smallest 1/2/5 x 10^n value that is at least `value`; 1 for an empty chart
pub fn axis_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn y_for(value: f64, max: f64) -> f64 {
    MARGIN_TOP + plot_height() * (1.0 - value / max)
}

/// Bar rectangles in SVG coordinates, one evenly spaced slot per label
pub fn bar_layout(series: &ChartSeries) -> Vec<BarGeometry> {
    let count = series.labels.len().max(1);
    let max = axis_max(series.max_value());
    let slot = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / count as f64;
    let bar_width = slot * 0.6;

    series
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = series.data.get(i).copied().unwrap_or(0.0).max(0.0);
            let y = y_for(value, max);
            BarGeometry {
                label: label.clone(),
                value,
                x: MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0,
                y,
                width: bar_width,
                height: MARGIN_TOP + plot_height() - y,
            }
        })
        .collect()
}

/// Y axis tick values from 0 to the axis maximum
pub fn axis_ticks(series: &ChartSeries) -> Vec<f64> {
    let max = axis_max(series.max_value());
    (0..=TICKS).map(|i| max * i as f64 / TICKS as f64).collect()
}

/// Vertical bar chart drawn as inline SVG
#[component]
pub fn BarChart(#[prop(into)] series: Signal<ChartSeries>, title: &'static str) -> impl IntoView {
    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);
    let max = Memo::new(move |_| axis_max(series.with(|s| s.max_value())));

    view! {
        <svg class="bar-chart" viewBox=view_box width="100%" role="img">
            <text x={WIDTH / 2.0} y=18.0 text-anchor="middle" class="bar-chart__title">{title}</text>

            {move || {
                series
                    .with(axis_ticks)
                    .into_iter()
                    .map(|tick| {
                        let y = y_for(tick, max.get());
                        view! {
                            <g class="bar-chart__tick">
                                <line x1=MARGIN_LEFT x2={WIDTH - MARGIN_RIGHT} y1=y y2=y stroke="#e5e7eb" />
                                <text x={MARGIN_LEFT - 6.0} y={y + 4.0} text-anchor="end">{format!("{}", tick)}</text>
                            </g>
                        }
                    })
                    .collect_view()
            }}

            {move || {
                series
                    .with(bar_layout)
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <g class="bar-chart__bar">
                                <rect
                                    x={bar.x}
                                    y={bar.y}
                                    width={bar.width}
                                    height={bar.height}
                                    fill=BAR_FILL
                                    stroke=BAR_STROKE
                                    stroke-width="1"
                                />
                                <text
                                    x={bar.x + bar.width / 2.0}
                                    y={bar.y - 6.0}
                                    text-anchor="middle"
                                    class="bar-chart__value"
                                >
                                    {format_tons(bar.value)}
                                </text>
                                <text
                                    x={bar.x + bar.width / 2.0}
                                    y={HEIGHT - MARGIN_BOTTOM + 18.0}
                                    text-anchor="middle"
                                >
                                    {bar.label.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
            }}

            <line
                x1=MARGIN_LEFT
                x2={WIDTH - MARGIN_RIGHT}
                y1={HEIGHT - MARGIN_BOTTOM}
                y2={HEIGHT - MARGIN_BOTTOM}
                stroke="#9ca3af"
            />
            <text x={WIDTH / 2.0} y={HEIGHT - 4.0} text-anchor="middle" class="bar-chart__legend">
                {move || series.with(|s| s.label.clone())}
            </text>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(0.0), 1.0);
        assert_eq!(axis_max(20.0), 20.0);
        assert_eq!(axis_max(23.0), 50.0);
        assert_eq!(axis_max(0.7), 1.0);
        assert_eq!(axis_max(120.0), 200.0);
        assert_eq!(axis_max(f64::NAN), 1.0);
    }

    #[test]
    fn test_single_bar_fills_axis() {
        let bars = bar_layout(&ChartSeries::all_stores(20.0));
        assert_eq!(bars.len(), 1);
        let bar = &bars[0];
        assert_eq!(bar.label, "All Stores");
        assert_eq!(bar.y, MARGIN_TOP);
        assert_eq!(bar.height, plot_height());
        // centred in the plot area
        let centre = bar.x + bar.width / 2.0;
        let plot_centre = MARGIN_LEFT + (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0;
        assert!((centre - plot_centre).abs() < 1e-9);
    }

    #[test]
    fn test_placeholder_has_flat_bar() {
        let bars = bar_layout(&ChartSeries::placeholder());
        assert_eq!(bars[0].label, "Selected Store");
        assert_eq!(bars[0].height, 0.0);
    }

    #[test]
    fn test_ticks() {
        let ticks = axis_ticks(&ChartSeries::all_stores(20.0));
        assert_eq!(ticks, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }
}
