//! Declarative SVG charts fed by `ChartData`
pub mod geometry;

use contracts::dashboards::d400_summary::dto::ChartData;
use leptos::prelude::*;

use self::geometry::{bar_layout, line_points, pie_slices, polyline_attr};
use crate::shared::components::stat_card::format_thousands;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Doughnut,
    Bar,
    Line,
}

impl ChartKind {
    /// From the server's `chartType`, falling back to `default`
    pub fn resolve(chart_type: Option<&str>, default: ChartKind) -> ChartKind {
        match chart_type.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("pie") => ChartKind::Pie,
            Some("doughnut") | Some("donut") => ChartKind::Doughnut,
            Some("bar") => ChartKind::Bar,
            Some("line") => ChartKind::Line,
            _ => default,
        }
    }
}

const PIE_SIZE: f64 = 220.0;
const PLOT_WIDTH: f64 = 480.0;
const PLOT_HEIGHT: f64 = 200.0;
const AXIS_GAP: f64 = 28.0;

fn pie_view(chart: &ChartData, doughnut: bool) -> AnyView {
    let c = PIE_SIZE / 2.0;
    let outer = c - 4.0;
    let inner = if doughnut { outer * 0.58 } else { 0.0 };
    let slices = pie_slices(&chart.points(), c, c, outer, inner);
    let total = chart.total();

    let legend = slices
        .iter()
        .map(|s| {
            let caption = format!("{} ({:.0}%)", format_thousands(s.value), s.percent());
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style:background-color=s.color></span>
                    <span class="chart-legend__label">{s.label.clone()}</span>
                    <span class="chart-legend__value">{caption}</span>
                </li>
            }
        })
        .collect_view();

    let paths = slices
        .into_iter()
        .map(|s| {
            let tip = format!("{}: {}", s.label, format_thousands(s.value));
            view! {
                <path d=s.path fill=s.color stroke="#ffffff" stroke-width="1" fill-rule="evenodd">
                    <title>{tip}</title>
                </path>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--pie">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", PIE_SIZE, PIE_SIZE)>
                {paths}
                {doughnut.then(|| view! {
                    <text x=c y=c class="chart__center-label" text-anchor="middle" dominant-baseline="middle">
                        {format_thousands(total)}
                    </text>
                })}
            </svg>
            <ul class="chart-legend">{legend}</ul>
        </div>
    }
    .into_any()
}

fn bar_view(chart: &ChartData) -> AnyView {
    let bars = bar_layout(&chart.points(), PLOT_WIDTH, PLOT_HEIGHT);
    let rects = bars
        .into_iter()
        .map(|b| {
            let label_x = b.x + b.width / 2.0;
            let value_y = (b.y - 4.0).max(10.0);
            view! {
                <g>
                    <rect x=b.x y=b.y width=b.width height=b.height fill=b.color rx="3">
                        <title>{format!("{}: {}", b.label, format_thousands(b.value))}</title>
                    </rect>
                    <text x=label_x y=value_y class="chart__value" text-anchor="middle">
                        {format_thousands(b.value)}
                    </text>
                    <text x=label_x y=PLOT_HEIGHT + 18.0 class="chart__axis-label" text-anchor="middle">
                        {b.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--bar">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT + AXIS_GAP)>
                <line x1="0" y1=PLOT_HEIGHT x2=PLOT_WIDTH y2=PLOT_HEIGHT class="chart__axis" />
                {rects}
            </svg>
        </div>
    }
    .into_any()
}

fn line_view(chart: &ChartData) -> AnyView {
    let padding = 12.0;
    let points: Vec<(f64, f64)> =
        line_points(&chart.data, PLOT_WIDTH - 2.0 * padding, PLOT_HEIGHT - padding)
            .into_iter()
            .map(|(x, y)| (x + padding, y + padding))
            .collect();
    let polyline = polyline_attr(&points);

    let markers = points
        .iter()
        .zip(chart.points())
        .map(|(&(x, y), (label, value))| {
            view! {
                <g>
                    <circle cx=x cy=y r="4" class="chart__point">
                        <title>{format!("{}: {}", label, format_thousands(value))}</title>
                    </circle>
                    <text x=x y=PLOT_HEIGHT + 18.0 class="chart__axis-label" text-anchor="middle">
                        {label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--line">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT + AXIS_GAP)>
                <line x1="0" y1=PLOT_HEIGHT x2=PLOT_WIDTH y2=PLOT_HEIGHT class="chart__axis" />
                <polyline points=polyline fill="none" stroke=geometry::palette_color(0) stroke-width="2" />
                {markers}
            </svg>
        </div>
    }
    .into_any()
}

/// Card with a title and one chart; `None` while loading
#[component]
pub fn ChartCard(
    #[prop(into)] title: String,
    #[prop(into)] data: Signal<Option<ChartData>>,
    /// Used when the server does not name a chart type
    default_kind: ChartKind,
) -> impl IntoView {
    let body = move || match data.get() {
        None => view! { <div class="chart__placeholder">"Loading…"</div> }.into_any(),
        Some(chart) if chart.labels.is_empty() || chart.data.is_empty() => {
            view! { <div class="chart__placeholder">"No data available"</div> }.into_any()
        }
        Some(chart) => match ChartKind::resolve(chart.chart_type.as_deref(), default_kind) {
            ChartKind::Pie | ChartKind::Doughnut if chart.is_empty() => {
                view! { <div class="chart__placeholder">"No data available"</div> }.into_any()
            }
            ChartKind::Pie => pie_view(&chart, false),
            ChartKind::Doughnut => pie_view(&chart, true),
            ChartKind::Bar => bar_view(&chart),
            ChartKind::Line => line_view(&chart),
        },
    };

    view! {
        <div class="card chart-card">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
            </div>
            <div class="card__body">{body}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_type_resolution() {
        assert_eq!(ChartKind::resolve(Some("PIE"), ChartKind::Bar), ChartKind::Pie);
        assert_eq!(ChartKind::resolve(Some("doughnut"), ChartKind::Bar), ChartKind::Doughnut);
        assert_eq!(ChartKind::resolve(Some(" line "), ChartKind::Bar), ChartKind::Line);
        assert_eq!(ChartKind::resolve(Some("radar"), ChartKind::Bar), ChartKind::Bar);
        assert_eq!(ChartKind::resolve(None, ChartKind::Doughnut), ChartKind::Doughnut);
    }
}
