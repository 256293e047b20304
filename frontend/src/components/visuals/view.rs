//! View rendering for the visualizations page.
//!
//! Top to bottom: a "Load Data" section reporting the status of each data
//! source, then the three graphs. Graph 1 is static, graphs 2 and 3 carry
//! their own controls. All charts are inline SVG laid out by the `charts`
//! module; failures and absent data render as notices, never as a broken
//! page.

use common::model::metrics::MetricsDataset;
use common::model::table::SurveyTable;
use common::requests::LoadStatus;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::charts::{self, PlotArea, CHART_HEIGHT, CHART_WIDTH};
use super::messages::{ChartKind, Msg};
use super::state::VisualsPage;

pub fn view(page: &VisualsPage, ctx: &Context<VisualsPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="visuals-page">
            <h1>{"Screen Time Visualizations"}</h1>
            <p>{"This page displays graphs based on the Screen Time Survey."}</p>

            <hr class="divider" />
            <h2>{"Load Data"}</h2>
            { build_load_section(page) }

            <hr class="divider" />
            <h2>{"Graphs"}</h2>
            { build_survey_bars(page) }
            { build_comparison_chart(page, link) }
            { build_metrics_chart(page, link) }
        </div>
    }
}

fn notice(kind: &'static str, text: &str) -> Html {
    html! { <div class={classes!("notice", kind)}>{ text.to_string() }</div> }
}

fn build_load_section(page: &VisualsPage) -> Html {
    let records_notice = match &page.records {
        None => html! { <p>{"Loading survey data…"}</p> },
        Some(load) => match &load.status {
            LoadStatus::Loaded => notice("success", "CSV file loaded successfully!"),
            LoadStatus::Missing => notice("warning", "'data.csv' not found or empty."),
            LoadStatus::Failed(e) => notice("error", &format!("Error loading CSV: {}", e)),
        },
    };
    let metrics_notice = match &page.metrics {
        None => html! { <p>{"Loading metrics…"}</p> },
        Some(load) => match &load.status {
            LoadStatus::Loaded => notice("success", "JSON file loaded successfully!"),
            LoadStatus::Missing => notice("warning", "'data.json' not found."),
            LoadStatus::Failed(e) => notice("error", &format!("Error loading JSON: {}", e)),
        },
    };

    html! {
        <>
            { records_notice }
            { metrics_notice }
        </>
    }
}

// GRAPH 1: every numeric survey column as a grouped bar chart over rows.
fn build_survey_bars(page: &VisualsPage) -> Html {
    let body = match &page.records {
        None => html! { <p>{"Loading…"}</p> },
        Some(load) if load.table.is_empty() => {
            notice("warning", "No data available in CSV for this chart yet.")
        }
        Some(load) => {
            let numeric = load.table.numeric_columns();
            if numeric.is_empty() {
                notice(
                    "warning",
                    "No numeric data to display yet, please fill out the survey to collect more!",
                )
            } else {
                let titles: Vec<String> = numeric
                    .iter()
                    .map(|&i| load.table.columns[i].title.clone())
                    .collect();
                html! {
                    <>
                        { grouped_bar_svg(&load.table, &numeric) }
                        { legend(&titles) }
                        <p class="chart-caption">
                            {"This bar chart shows your collected numeric data, \
                              such as hours on phone, focus, and productivity levels."}
                        </p>
                    </>
                }
            }
        }
    };

    html! {
        <section class="chart">
            <h3>{"Graph 1: Survey Numbers (Static)"}</h3>
            { body }
        </section>
    }
}

// GRAPH 2: user-chosen X/Y numeric columns as two lines over row order.
fn build_comparison_chart(page: &VisualsPage, link: &Scope<VisualsPage>) -> Html {
    let body = match &page.records {
        None => html! { <p>{"Loading…"}</p> },
        Some(load) if load.table.is_empty() => {
            notice("warning", "No CSV data found for this graph.")
        }
        Some(load) => match page.axis_selection(&load.table) {
            None => notice(
                "warning",
                "Not enough numeric columns in CSV for dynamic comparison.",
            ),
            Some((x_index, y_index)) => {
                let table = &load.table;
                let titles: Vec<String> = table
                    .numeric_columns()
                    .iter()
                    .map(|&i| table.columns[i].title.clone())
                    .collect();
                let x_title = table.columns[x_index].title.clone();
                let y_title = table.columns[y_index].title.clone();
                let series = [
                    (x_title.clone(), table.column_values(x_index)),
                    (y_title.clone(), table.column_values(y_index)),
                ];

                html! {
                    <>
                        <div class="chart-controls">
                            { axis_select(
                                "Select X-axis",
                                &titles,
                                &x_title,
                                link.callback(|e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    Msg::SelectX(select.value())
                                }),
                            ) }
                            { axis_select(
                                "Select Y-axis",
                                &titles,
                                &y_title,
                                link.callback(|e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    Msg::SelectY(select.value())
                                }),
                            ) }
                        </div>
                        { line_svg(&series, &index_labels(table.rows.len())) }
                        { legend(&[x_title.clone(), y_title.clone()]) }
                        <p class="chart-caption">
                            { format!(
                                "This line chart shows the relationship between {} and {}.",
                                x_title, y_title
                            ) }
                        </p>
                    </>
                }
            }
        },
    };

    html! {
        <section class="chart">
            <h3>{"Graph 2: Compare Survey Measures (Dynamic)"}</h3>
            { body }
        </section>
    }
}

// GRAPH 3: metrics from the JSON document, bar or line, indexed by label.
fn build_metrics_chart(page: &VisualsPage, link: &Scope<VisualsPage>) -> Html {
    let body = match &page.metrics {
        None => html! { <p>{"Loading…"}</p> },
        Some(load) => match &load.status {
            LoadStatus::Missing | LoadStatus::Failed(_) => {
                notice("warning", "No JSON data found for this chart.")
            }
            LoadStatus::Loaded => match MetricsDataset::from_document(&load.document) {
                Err(e) => notice("error", &format!("Error displaying JSON chart: {}", e)),
                Ok(dataset) if dataset.data_points.is_empty() => {
                    notice("warning", "No JSON data found for this chart.")
                }
                Ok(dataset) => {
                    let names = dataset.metric_names();
                    let labels: Vec<String> = dataset
                        .data_points
                        .iter()
                        .map(|p| p.label.clone())
                        .collect();
                    let series: Vec<(String, Vec<f64>)> = names
                        .iter()
                        .map(|name| {
                            let values = dataset
                                .metric_values(name)
                                .into_iter()
                                .map(|v| v.unwrap_or(f64::NAN))
                                .collect();
                            (name.clone(), values)
                        })
                        .collect();

                    html! {
                        <>
                            { metrics_table(&dataset, &names) }
                            { chart_kind_toggle(page.metrics_chart, link) }
                            {
                                match page.metrics_chart {
                                    ChartKind::Bar => grouped_bar_series_svg(&series, &labels),
                                    ChartKind::Line => line_svg(&series, &labels),
                                }
                            }
                            { legend(&names) }
                            <p class="chart-caption">
                                {"This chart displays your average metrics stored in the JSON file."}
                            </p>
                        </>
                    }
                }
            },
        },
    };

    html! {
        <section class="chart">
            <h3>{"Graph 3: Average Metrics from JSON (Dynamic)"}</h3>
            { body }
        </section>
    }
}

fn metrics_table(dataset: &MetricsDataset, names: &[String]) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"label"}</th>
                    { for names.iter().map(|name| html! { <th>{ name.clone() }</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for dataset.data_points.iter().map(|point| html! {
                        <tr>
                            <td>{ point.label.clone() }</td>
                            {
                                for names.iter().map(|name| {
                                    let cell = point
                                        .metrics
                                        .iter()
                                        .find(|(n, _)| n == name)
                                        .map(|(_, v)| trim_number(*v))
                                        .unwrap_or_default();
                                    html! { <td>{ cell }</td> }
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

fn chart_kind_toggle(current: ChartKind, link: &Scope<VisualsPage>) -> Html {
    html! {
        <div class="chart-controls">
            <span>{"Choose chart type:"}</span>
            <label>
                <input
                    type="radio"
                    name="metrics-chart-kind"
                    checked={current == ChartKind::Bar}
                    onchange={link.callback(|_| Msg::SetMetricsChart(ChartKind::Bar))}
                />
                {"Bar Chart"}
            </label>
            <label>
                <input
                    type="radio"
                    name="metrics-chart-kind"
                    checked={current == ChartKind::Line}
                    onchange={link.callback(|_| Msg::SetMetricsChart(ChartKind::Line))}
                />
                {"Line Chart"}
            </label>
        </div>
    }
}

fn axis_select(
    label: &str,
    options: &[String],
    current: &str,
    onchange: Callback<Event>,
) -> Html {
    html! {
        <label>
            { label }
            {" "}
            <select {onchange}>
                { for options.iter().map(|title| html! {
                    <option value={title.clone()} selected={title == current}>
                        { title.clone() }
                    </option>
                }) }
            </select>
        </label>
    }
}

fn legend(titles: &[String]) -> Html {
    html! {
        <div class="chart-legend">
            { for titles.iter().enumerate().map(|(index, title)| html! {
                <span>
                    <span
                        class="swatch"
                        style={format!("background:{};", charts::series_color(index))}
                    ></span>
                    { title.clone() }
                </span>
            }) }
        </div>
    }
}

// SVG assembly below; the coordinates all come from `charts`.

fn fmt(value: f64) -> String {
    format!("{:.1}", value)
}

/// Axis label without a trailing `.0` for whole numbers.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn index_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| i.to_string()).collect()
}

fn svg_frame(area: &PlotArea, max: f64) -> Html {
    html! {
        <>
            <line
                x1={fmt(area.left)} y1={fmt(area.top)}
                x2={fmt(area.left)} y2={fmt(area.bottom())}
                style="stroke:#999;stroke-width:1"
            />
            <line
                x1={fmt(area.left)} y1={fmt(area.bottom())}
                x2={fmt(area.right())} y2={fmt(area.bottom())}
                style="stroke:#999;stroke-width:1"
            />
            <text
                x={fmt(area.left - 6.0)} y={fmt(area.top + 4.0)}
                style="font-size:10px;fill:#555;text-anchor:end"
            >
                { trim_number(max) }
            </text>
            <text
                x={fmt(area.left - 6.0)} y={fmt(area.bottom() + 4.0)}
                style="font-size:10px;fill:#555;text-anchor:end"
            >
                {"0"}
            </text>
        </>
    }
}

fn svg_x_labels(labels: &[String], area: &PlotArea) -> Html {
    // Thin dense label sets out instead of overlapping them.
    let step = (labels.len() / 12).max(1);
    html! {
        <>
            { for labels.iter().enumerate().step_by(step).map(|(index, label)| html! {
                <text
                    x={fmt(charts::slot_center(index, labels.len(), area))}
                    y={fmt(area.bottom() + 16.0)}
                    style="font-size:10px;fill:#555;text-anchor:middle"
                >
                    { label.clone() }
                </text>
            }) }
        </>
    }
}

fn grouped_bar_svg(table: &SurveyTable, numeric: &[usize]) -> Html {
    let series: Vec<(String, Vec<f64>)> = numeric
        .iter()
        .map(|&column| {
            (
                table.columns[column].title.clone(),
                table.column_values(column),
            )
        })
        .collect();
    grouped_bar_series_svg(&series, &index_labels(table.rows.len()))
}

fn grouped_bar_series_svg(series: &[(String, Vec<f64>)], labels: &[String]) -> Html {
    let area = PlotArea::standard();
    let max = charts::axis_max(series.iter().flat_map(|(_, values)| values.iter().copied()));
    let group_count = labels.len();

    let mut bars: Vec<Html> = Vec::new();
    for (series_index, (_, values)) in series.iter().enumerate() {
        for (group_index, &value) in values.iter().enumerate() {
            if let Some(bar) = charts::bar_layout(
                group_index,
                group_count,
                series_index,
                series.len(),
                value,
                max,
                &area,
            ) {
                bars.push(html! {
                    <rect
                        x={fmt(bar.x)} y={fmt(bar.y)}
                        width={fmt(bar.width)} height={fmt(bar.height)}
                        style={format!("fill:{};", charts::series_color(series_index))}
                    />
                });
            }
        }
    }

    html! {
        <svg
            width={CHART_WIDTH.to_string()}
            height={CHART_HEIGHT.to_string()}
            viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}
        >
            { svg_frame(&area, max) }
            { for bars }
            { svg_x_labels(labels, &area) }
        </svg>
    }
}

fn line_svg(series: &[(String, Vec<f64>)], labels: &[String]) -> Html {
    let area = PlotArea::standard();
    let max = charts::axis_max(series.iter().flat_map(|(_, values)| values.iter().copied()));

    html! {
        <svg
            width={CHART_WIDTH.to_string()}
            height={CHART_HEIGHT.to_string()}
            viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}
        >
            { svg_frame(&area, max) }
            { for series.iter().enumerate().map(|(index, (_, values))| html! {
                <polyline
                    points={charts::polyline_points(values, max, &area)}
                    style={format!(
                        "fill:none;stroke:{};stroke-width:2",
                        charts::series_color(index)
                    )}
                />
            }) }
            { svg_x_labels(labels, &area) }
        </svg>
    }
}
