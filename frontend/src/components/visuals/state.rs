use super::messages::ChartKind;
use common::model::table::SurveyTable;
use common::requests::{MetricsLoad, TableLoad};

/// State of the visualizations page.
///
/// Selections live here, so they survive re-renders while the page is
/// mounted and reset to defaults when it is remounted. Fields are `pub`
/// for the `view` and `update` modules.
pub struct VisualsPage {
    /// Survey log load, `None` until the fetch resolves.
    pub records: Option<TableLoad>,

    /// Metrics document load, `None` until the fetch resolves.
    pub metrics: Option<MetricsLoad>,

    /// X column chosen on the comparison chart, by title. `None` means the
    /// default (first numeric column).
    pub x_column: Option<String>,

    /// Y column chosen on the comparison chart. `None` means the default
    /// (second numeric column).
    pub y_column: Option<String>,

    /// Rendering chosen for the metrics chart.
    pub metrics_chart: ChartKind,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl VisualsPage {
    pub fn new() -> Self {
        VisualsPage {
            records: None,
            metrics: None,
            x_column: None,
            y_column: None,
            metrics_chart: ChartKind::Bar,
            loaded: false,
        }
    }

    /// Resolves the comparison chart's axis selections to column indices.
    ///
    /// Returns `None` when the table offers fewer than two numeric columns
    /// (the chart's availability gate). A stored title that no longer names
    /// a numeric column falls back to that axis's default, so stale
    /// selections degrade instead of breaking the chart.
    pub fn axis_selection(&self, table: &SurveyTable) -> Option<(usize, usize)> {
        let numeric = table.numeric_columns();
        if numeric.len() < 2 {
            return None;
        }
        let resolve = |choice: &Option<String>, default_slot: usize| {
            choice
                .as_ref()
                .and_then(|title| {
                    numeric
                        .iter()
                        .copied()
                        .find(|&i| table.columns[i].title == *title)
                })
                .unwrap_or(numeric[default_slot])
        };
        Some((resolve(&self.x_column, 0), resolve(&self.y_column, 1)))
    }
}
