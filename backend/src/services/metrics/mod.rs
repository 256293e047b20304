//! Read-only access to the metrics document (`data.json`).
//!
//! The document supplies pre-aggregated metrics for the visualization
//! page's third chart. It is caller-provided and never written by the
//! server; the single route loads it defensively and hands the raw JSON to
//! the frontend, which builds its typed dataset inside the chart that
//! consumes it.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod get_document;

const API_PATH: &str = "/api/metrics";

/// Configures and returns the Actix scope for metrics routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get_document::process))
}
