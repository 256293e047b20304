//! Survey intake and read-back over the append-only CSV log.
//!
//! This module owns every interaction with `data.csv`. The log is the sole
//! store of truth for submitted survey entries: rows are only ever appended,
//! and the five-field header written on first use fixes the column set for
//! the lifetime of the file.
//!
//! The provided routes are:
//! - `POST /api/survey/submit`: Accepts one `SurveyRecord` as JSON, appends
//!   it under the store's write lock (writing the header first when the file
//!   is absent or empty), and answers with a `SubmitReceipt` carrying the
//!   new row count and a one-line summary. A failed write answers `503` with
//!   the cause instead of pretending the entry was saved.
//!
//! - `GET /api/survey/records`: Reads the whole log back defensively and
//!   always answers `200` with a `TableLoad`: a missing or empty file yields
//!   the `Missing` warning status, a parse failure is caught into
//!   `Failed(cause)`, and both degrade to an empty table so the pages keep
//!   rendering.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod records;
mod submit;

const API_PATH: &str = "/api/survey";

/// Configures and returns the Actix scope for survey routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to append one submitted survey entry.
        .route("/submit", post().to(submit::process))
        // Route to read the full survey log back for display.
        .route("/records", get().to(records::process))
}
