use crate::store::state::StoreState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{LoadStatus, MetricsLoad};
use log::warn;
use serde_json::Value;
use std::path::Path;

pub(crate) async fn process(state: web::Data<StoreState>) -> impl Responder {
    HttpResponse::Ok().json(load_metrics(&state.metrics_path))
}

/// Defensive load of the metrics document.
///
/// A missing file yields `Missing`; an unreadable or unparsable file is
/// caught into `Failed(cause)`. Both degrade to a `null` document. Note
/// that a present-but-empty file is a parse failure, not `Missing`: the
/// absence warning is reserved for a file that does not exist.
pub fn load_metrics(path: &Path) -> MetricsLoad {
    if !path.exists() {
        return MetricsLoad {
            status: LoadStatus::Missing,
            document: Value::Null,
        };
    }

    let failed = |cause: String| {
        warn!("Metrics document at {} failed to load: {}", path.display(), cause);
        MetricsLoad {
            status: LoadStatus::Failed(cause),
            document: Value::Null,
        }
    };

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => return failed(e.to_string()),
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(document) => MetricsLoad {
            status: LoadStatus::Loaded,
            document,
        },
        Err(e) => failed(e.to_string()),
    }
}
