use crate::store::state::StoreState;
use actix_web::{web, HttpResponse, Responder};
use common::model::table::{ColumnKind, SurveyTable, TableColumn};
use common::requests::{LoadStatus, TableLoad};
use log::warn;
use std::path::Path;

pub(crate) async fn process(state: web::Data<StoreState>) -> impl Responder {
    HttpResponse::Ok().json(load_survey_table(&state.survey_path))
}

/// Defensive whole-file load of the survey log.
///
/// Never fails: a missing or zero-length file yields `Missing` and an empty
/// table, a parse error is caught into `Failed(cause)` with an empty table,
/// and a healthy file yields `Loaded` with header-derived columns and all
/// data rows in file order.
pub fn load_survey_table(path: &Path) -> TableLoad {
    let missing = || TableLoad {
        status: LoadStatus::Missing,
        table: SurveyTable::default(),
    };

    let len = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(_) => return missing(),
    };
    if len == 0 {
        return missing();
    }

    match read_table(path) {
        Ok(table) => TableLoad {
            status: LoadStatus::Loaded,
            table,
        },
        Err(e) => {
            warn!("Survey log at {} failed to parse: {}", path.display(), e);
            TableLoad {
                status: LoadStatus::Failed(e),
                table: SurveyTable::default(),
            }
        }
    }
}

fn read_table(path: &Path) -> Result<SurveyTable, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| e.to_string())?;

    let headers = reader.headers().map_err(|e| e.to_string())?.clone();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    let columns = headers
        .iter()
        .enumerate()
        .map(|(index, title)| TableColumn {
            title: title.to_string(),
            kind: infer_column_kind(index, &rows),
        })
        .collect();

    Ok(SurveyTable { columns, rows })
}

/// Column type inference over all rows: `Number` when at least one cell
/// parses as `f64` and no non-empty cell fails to parse. Empty cells are
/// tolerated; an all-empty column stays `Text`.
fn infer_column_kind(column: usize, rows: &[Vec<String>]) -> ColumnKind {
    let mut parsed_any = false;
    for row in rows {
        let cell = match row.get(column) {
            Some(cell) => cell.trim(),
            None => return ColumnKind::Text,
        };
        if cell.is_empty() {
            continue;
        }
        if cell.parse::<f64>().is_ok() {
            parsed_any = true;
        } else {
            return ColumnKind::Text;
        }
    }
    if parsed_any {
        ColumnKind::Number
    } else {
        ColumnKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_log(dir: &TempDir, contents: &str) -> StoreState {
        let state = StoreState::new(dir.path());
        let mut file = std::fs::File::create(&state.survey_path).expect("create log");
        file.write_all(contents.as_bytes()).expect("write log");
        state
    }

    #[test]
    fn missing_file_loads_as_warning_not_error() {
        let dir = TempDir::new().expect("temp dir");
        let state = StoreState::new(dir.path());

        let load = load_survey_table(&state.survey_path);
        assert_eq!(load.status, LoadStatus::Missing);
        assert!(load.table.is_empty());
    }

    #[test]
    fn zero_byte_file_loads_as_warning_not_error() {
        let dir = TempDir::new().expect("temp dir");
        let state = write_log(&dir, "");

        let load = load_survey_table(&state.survey_path);
        assert_eq!(load.status, LoadStatus::Missing);
        assert!(load.table.is_empty());
    }

    #[test]
    fn healthy_log_loads_with_inferred_column_kinds() {
        let dir = TempDir::new().expect("temp dir");
        let state = write_log(
            &dir,
            "Name,ScreenTimeHours,FocusLevel,Mood,ProductivityLevel\n\
             Alice,3.5,7,Happy,8\n\
             Bob,1.0,4,Tired,5\n",
        );

        let load = load_survey_table(&state.survey_path);
        assert_eq!(load.status, LoadStatus::Loaded);
        assert_eq!(load.table.rows.len(), 2);
        assert_eq!(load.table.rows[0][0], "Alice");
        let kinds: Vec<ColumnKind> = load.table.columns.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::Text,
                ColumnKind::Number,
                ColumnKind::Number,
                ColumnKind::Text,
                ColumnKind::Number,
            ]
        );
    }

    #[test]
    fn all_text_log_has_no_numeric_columns() {
        let dir = TempDir::new().expect("temp dir");
        let state = write_log(&dir, "Name,Mood\nAlice,Happy\nBob,Tired\n");

        let load = load_survey_table(&state.survey_path);
        assert_eq!(load.status, LoadStatus::Loaded);
        assert!(load.table.numeric_columns().is_empty());
    }

    #[test]
    fn empty_cells_do_not_disqualify_a_numeric_column() {
        let dir = TempDir::new().expect("temp dir");
        let state = write_log(&dir, "Name,FocusLevel\nAlice,7\nBob,\n");

        let load = load_survey_table(&state.survey_path);
        assert_eq!(load.table.numeric_columns(), vec![1]);
    }

    #[test]
    fn all_empty_column_stays_text() {
        let dir = TempDir::new().expect("temp dir");
        let state = write_log(&dir, "Name,FocusLevel\nAlice,\nBob,\n");

        let load = load_survey_table(&state.survey_path);
        assert_eq!(load.table.columns[1].kind, ColumnKind::Text);
    }

    #[test]
    fn ragged_row_is_caught_as_a_parse_failure() {
        let dir = TempDir::new().expect("temp dir");
        let state = write_log(&dir, "Name,FocusLevel\nAlice,7,extra\n");

        let load = load_survey_table(&state.survey_path);
        assert!(matches!(load.status, LoadStatus::Failed(_)));
        assert!(load.table.is_empty());
    }

    #[actix_web::test]
    async fn records_endpoint_answers_200_even_for_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let state = StoreState::new(dir.path());
        let app = actix_web::test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(crate::services::survey::configure_routes()),
        )
        .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/api/survey/records")
            .to_request();
        let load: TableLoad = actix_web::test::call_and_read_body_json(&app, req).await;

        assert_eq!(load.status, LoadStatus::Missing);
        assert!(load.table.is_empty());
    }
}
