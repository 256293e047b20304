use crate::store::state::StoreState;
use actix_web::{web, HttpResponse, Responder};
use common::model::survey::{SurveyRecord, SURVEY_FIELDS};
use common::requests::SubmitReceipt;
use log::{error, info};
use std::fs::OpenOptions;
use std::path::Path;

/// HTTP handler wrapper that converts the append result to an `HttpResponse`.
///
/// - On success: returns `200 OK` with the `SubmitReceipt` as JSON.
/// - On failure: returns `503 Service Unavailable` with the cause, so the
///   client can tell the user the entry was NOT saved.
pub async fn process(
    payload: web::Json<SurveyRecord>,
    state: web::Data<StoreState>,
) -> impl Responder {
    match append_record(&state, &payload).await {
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(e) => {
            error!("Failed to append survey entry: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving survey entry: {}", e))
        }
    }
}

/// Appends one record to the survey log.
///
/// Holds the store's write lock for the whole sequence. If the file is
/// absent or zero-length the canonical header row is written first; the
/// record follows as one CSV row with standard quoting. The receipt counts
/// the data rows present after the append.
pub async fn append_record(
    state: &StoreState,
    record: &SurveyRecord,
) -> Result<SubmitReceipt, String> {
    let _guard = state.lock_writes().await;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&state.survey_path)
        .map_err(|e| e.to_string())?;
    let needs_header = file.metadata().map_err(|e| e.to_string())?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if needs_header {
        writer.write_record(SURVEY_FIELDS).map_err(|e| e.to_string())?;
    }
    writer.serialize(record).map_err(|e| e.to_string())?;
    writer.flush().map_err(|e| e.to_string())?;
    drop(writer);

    let rows_total = count_data_rows(&state.survey_path)?;
    info!("Survey entry appended ({} rows total)", rows_total);

    Ok(SubmitReceipt {
        rows_total,
        summary: record.summary_line(),
    })
}

/// Data rows currently in the log, header excluded.
fn count_data_rows(path: &Path) -> Result<usize, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| e.to_string())?;
    Ok(reader.records().filter_map(Result::ok).count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use common::model::survey::Mood;
    use tempfile::TempDir;

    fn record(name: &str, hours: f64, focus: u8, mood: Mood, productivity: u8) -> SurveyRecord {
        SurveyRecord {
            name: name.to_string(),
            screen_time_hours: hours,
            focus_level: focus,
            mood,
            productivity_level: productivity,
        }
    }

    fn read_lines(state: &StoreState) -> Vec<String> {
        std::fs::read_to_string(&state.survey_path)
            .expect("survey log readable")
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[actix_web::test]
    async fn fresh_file_starts_with_the_canonical_header() {
        let dir = TempDir::new().expect("temp dir");
        let state = StoreState::new(dir.path());

        append_record(&state, &record("Alice", 3.5, 7, Mood::Happy, 8))
            .await
            .expect("append succeeds");

        let lines = read_lines(&state);
        assert_eq!(lines[0], "Name,ScreenTimeHours,FocusLevel,Mood,ProductivityLevel");
    }

    #[actix_web::test]
    async fn alice_scenario_row_and_summary() {
        let dir = TempDir::new().expect("temp dir");
        let state = StoreState::new(dir.path());

        let receipt = append_record(&state, &record("Alice", 3.5, 7, Mood::Happy, 8))
            .await
            .expect("append succeeds");

        assert_eq!(read_lines(&state)[1], "Alice,3.5,7,Happy,8");
        assert_eq!(receipt.rows_total, 1);
        assert_eq!(
            receipt.summary,
            "Alice spent 3.5 hours on their phone, felt 7/10 focused, \
             rated their productivity 8/10, and was Happy today."
        );
    }

    #[actix_web::test]
    async fn appends_preserve_submission_order_with_one_header() {
        let dir = TempDir::new().expect("temp dir");
        let state = StoreState::new(dir.path());

        for (i, name) in ["Alice", "Bob", "Cleo"].iter().enumerate() {
            let receipt = append_record(&state, &record(name, 1.0, 5, Mood::Okay, 5))
                .await
                .expect("append succeeds");
            assert_eq!(receipt.rows_total, i + 1);
        }

        let lines = read_lines(&state);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Alice,"));
        assert!(lines[2].starts_with("Bob,"));
        assert!(lines[3].starts_with("Cleo,"));
    }

    #[actix_web::test]
    async fn names_with_commas_get_standard_csv_quoting() {
        let dir = TempDir::new().expect("temp dir");
        let state = StoreState::new(dir.path());

        append_record(&state, &record("Smith, Jane", 2.0, 6, Mood::Sad, 3))
            .await
            .expect("append succeeds");

        assert_eq!(read_lines(&state)[1], "\"Smith, Jane\",2.0,6,Sad,3");
    }

    #[actix_web::test]
    async fn submit_endpoint_returns_receipt() {
        let dir = TempDir::new().expect("temp dir");
        let state = StoreState::new(dir.path());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(crate::services::survey::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/survey/submit")
            .set_json(record("Alice", 3.5, 7, Mood::Happy, 8))
            .to_request();
        let receipt: SubmitReceipt = test::call_and_read_body_json(&app, req).await;

        assert_eq!(receipt.rows_total, 1);
        assert!(receipt.summary.starts_with("Alice spent 3.5 hours"));
    }

    #[actix_web::test]
    async fn submit_endpoint_surfaces_write_failures() {
        let dir = TempDir::new().expect("temp dir");
        // Point the log path at an existing directory so the open fails.
        let mut state = StoreState::new(dir.path());
        state.survey_path = dir.path().to_path_buf();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(crate::services::survey::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/survey/submit")
            .set_json(record("Alice", 3.5, 7, Mood::Happy, 8))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
