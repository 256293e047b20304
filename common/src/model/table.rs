use serde::{Deserialize, Serialize};

/// Kind inferred for a CSV column: `Number` when every non-empty cell
/// parses as `f64` and at least one cell does, `Text` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Text,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub title: String,
    pub kind: ColumnKind,
}

/// The survey CSV parsed into memory: header-derived columns plus all data
/// rows as raw strings, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyTable {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl SurveyTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of the `Number` columns, in header order.
    pub fn numeric_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == ColumnKind::Number)
            .map(|(i, _)| i)
            .collect()
    }

    /// Values of one column parsed as `f64`, one entry per row. Cells that
    /// do not parse (including empty ones) become `NaN` so charts can skip
    /// them without losing row alignment.
    pub fn column_values(&self, column: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| {
                row.get(column)
                    .and_then(|cell| cell.trim().parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SurveyTable {
        SurveyTable {
            columns: vec![
                TableColumn { title: "Name".to_string(), kind: ColumnKind::Text },
                TableColumn { title: "FocusLevel".to_string(), kind: ColumnKind::Number },
                TableColumn { title: "ProductivityLevel".to_string(), kind: ColumnKind::Number },
            ],
            rows: vec![
                vec!["Alice".to_string(), "7".to_string(), "8".to_string()],
                vec!["Bob".to_string(), "".to_string(), "4".to_string()],
            ],
        }
    }

    #[test]
    fn numeric_columns_keep_header_order() {
        assert_eq!(table().numeric_columns(), vec![1, 2]);
    }

    #[test]
    fn column_values_preserve_row_alignment() {
        let values = table().column_values(1);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], 7.0);
        assert!(values[1].is_nan());
    }

    #[test]
    fn empty_table_reports_empty() {
        assert!(SurveyTable::default().is_empty());
        assert!(!table().is_empty());
    }
}
