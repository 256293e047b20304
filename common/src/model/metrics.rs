//! In-memory form of the read-only metrics document (`data.json`).
//!
//! The file has the shape `{ "data_points": [ { "label": <text>,
//! <metric>: <number>, ... }, ... ] }`. The backend serves the document
//! verbatim; `MetricsDataset::from_document` turns it into a typed dataset
//! inside the chart that consumes it, so a malformed document is an error
//! local to that chart rather than a failed page load.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `data_points`: a label plus every numeric field of the
/// entry, in document order. Non-numeric extras are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub label: String,
    pub metrics: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsDataset {
    pub data_points: Vec<MetricPoint>,
}

impl MetricsDataset {
    /// Builds the dataset from a raw JSON document.
    ///
    /// Fails with a descriptive message when the `data_points` key is
    /// absent, is not an array, or an entry is not an object with a textual
    /// `label`.
    pub fn from_document(document: &Value) -> Result<MetricsDataset, String> {
        let points = document
            .get("data_points")
            .ok_or_else(|| "metrics document has no `data_points` key".to_string())?
            .as_array()
            .ok_or_else(|| "`data_points` is not an array".to_string())?;

        let mut data_points = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            let entry = point
                .as_object()
                .ok_or_else(|| format!("data point {} is not an object", index))?;
            let label = entry
                .get("label")
                .and_then(Value::as_str)
                .ok_or_else(|| format!("data point {} has no textual `label`", index))?
                .to_string();

            let metrics = entry
                .iter()
                .filter(|(key, _)| key.as_str() != "label")
                .filter_map(|(key, value)| value.as_f64().map(|v| (key.clone(), v)))
                .collect();

            data_points.push(MetricPoint { label, metrics });
        }

        Ok(MetricsDataset { data_points })
    }

    /// Ordered union of metric names across all points (first appearance
    /// wins), giving every chart series a stable identity even when points
    /// carry different field sets.
    pub fn metric_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for point in &self.data_points {
            for (name, _) in &point.metrics {
                if !names.iter().any(|n| n == name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    /// Values of one metric across all points, `None` where a point does
    /// not carry it.
    pub fn metric_values(&self, name: &str) -> Vec<Option<f64>> {
        self.data_points
            .iter()
            .map(|point| {
                point
                    .metrics
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, v)| *v)
            })
            .collect()
    }
}
