use common::model::survey::SurveyRecord;
use common::requests::{SubmitReceipt, TableLoad};

/// State of the survey page.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct SurveyPage {
    /// The record under construction, bound to the form widgets. Starts at
    /// the form defaults (empty name, 0.0 hours, midpoint ratings, first
    /// mood option).
    pub draft: SurveyRecord,

    /// True while a submission is in flight; the submit button is disabled
    /// to keep one click one row.
    pub submitting: bool,

    /// Receipt of the last successful submission, rendered as the success
    /// notice plus summary line.
    pub last_receipt: Option<SubmitReceipt>,

    /// Reason of the last failed submission, rendered as an error notice.
    pub last_error: Option<String>,

    /// Current contents of the survey log, `None` until the first load
    /// finishes.
    pub records: Option<TableLoad>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl SurveyPage {
    pub fn new() -> Self {
        SurveyPage {
            draft: SurveyRecord::default(),
            submitting: false,
            last_receipt: None,
            last_error: None,
            records: None,
            loaded: false,
        }
    }
}
