use common::requests::{MetricsLoad, TableLoad};

/// Rendering offered for the metrics chart.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

pub enum Msg {
    RecordsLoaded(TableLoad),
    RecordsFailed(String),
    MetricsLoaded(MetricsLoad),
    MetricsFailed(String),

    /// X/Y choices of the comparison chart, by column title.
    SelectX(String),
    SelectY(String),

    /// Bar/line toggle of the metrics chart.
    SetMetricsChart(ChartKind),
}
