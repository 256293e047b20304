use common::model::table::SurveyTable;
use common::requests::{LoadStatus, MetricsLoad, TableLoad};
use gloo_console::error;
use serde_json::Value;
use yew::prelude::*;

use super::messages::Msg;
use super::state::VisualsPage;

/// Central update function for the visualizations page. Load failures fold
/// into `Failed` statuses so every render path below stays total.
pub fn update(page: &mut VisualsPage, _ctx: &Context<VisualsPage>, msg: Msg) -> bool {
    match msg {
        Msg::RecordsLoaded(load) => {
            page.records = Some(load);
            true
        }
        Msg::RecordsFailed(reason) => {
            error!("survey data load failed:", reason.clone());
            page.records = Some(TableLoad {
                status: LoadStatus::Failed(reason),
                table: SurveyTable::default(),
            });
            true
        }
        Msg::MetricsLoaded(load) => {
            page.metrics = Some(load);
            true
        }
        Msg::MetricsFailed(reason) => {
            error!("metrics load failed:", reason.clone());
            page.metrics = Some(MetricsLoad {
                status: LoadStatus::Failed(reason),
                document: Value::Null,
            });
            true
        }
        Msg::SelectX(title) => {
            page.x_column = Some(title);
            true
        }
        Msg::SelectY(title) => {
            page.y_column = Some(title);
            true
        }
        Msg::SetMetricsChart(kind) => {
            let changed = page.metrics_chart != kind;
            page.metrics_chart = kind;
            changed
        }
    }
}
