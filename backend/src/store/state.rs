//! Shared ownership of the on-disk data files.
//!
//! The server keeps two flat files next to its working directory:
//! - `data.csv`: the append-only survey log, written by the submit
//!   endpoint and read back whole for display and charting.
//! - `data.json`: a read-only metrics document consumed by the
//!   visualization page; nothing in the server writes it.
//!
//! `StoreState` is created once in `main.rs` and injected into the Actix
//! application as `web::Data`, the same way other shared state travels
//! through the app. The write mutex serializes CSV appends: a submission
//! holds it across the open-check-write-flush sequence, so two concurrent
//! submissions cannot interleave rows or both decide the header is missing.
//! Reads take no lock; a torn read surfaces as a caught parse failure,
//! which the loader taxonomy already absorbs.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// File name of the append-only survey log.
pub const SURVEY_FILE: &str = "data.csv";
/// File name of the read-only metrics document.
pub const METRICS_FILE: &str = "data.json";

/// Thread-safe handle to the data files, cloneable into every worker.
#[derive(Clone)]
pub struct StoreState {
    pub survey_path: PathBuf,
    pub metrics_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl StoreState {
    /// Store rooted at `dir`. Tests point this at a temp directory.
    pub fn new(dir: impl AsRef<Path>) -> StoreState {
        let dir = dir.as_ref();
        StoreState {
            survey_path: dir.join(SURVEY_FILE),
            metrics_path: dir.join(METRICS_FILE),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Store rooted at the server's working directory.
    pub fn local() -> StoreState {
        StoreState::new(".")
    }

    /// Takes the append lock. Held across the whole append sequence.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_at_the_given_directory() {
        let state = StoreState::new("/tmp/survey-test");
        assert!(state.survey_path.ends_with(SURVEY_FILE));
        assert!(state.metrics_path.ends_with(METRICS_FILE));
        assert_eq!(state.survey_path.parent(), state.metrics_path.parent());
    }

    #[test]
    fn clones_share_the_write_lock() {
        let state = StoreState::new("/tmp/survey-test");
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.write_lock, &clone.write_lock));
    }
}
