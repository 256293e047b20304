//! Payloads exchanged between the frontend and the backend API.

use crate::model::table::SurveyTable;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a defensive data-source load. Mirrors the error taxonomy of
/// the visualization page: `Missing` is the expected-absent warning,
/// `Failed` carries a caught parse error; both come with an empty default
/// dataset so rendering always continues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Failed(String),
}

/// Response of `GET /api/survey/records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableLoad {
    pub status: LoadStatus,
    pub table: SurveyTable,
}

/// Response of `GET /api/metrics`. The document is served raw; the chart
/// that consumes it builds a `MetricsDataset` in its own scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsLoad {
    pub status: LoadStatus,
    pub document: Value,
}

/// Response of a successful `POST /api/survey/submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Data rows in the file after the append (header excluded).
    pub rows_total: usize,
    /// Human-readable recap of the record just saved.
    pub summary: String,
}
