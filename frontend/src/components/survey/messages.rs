use common::requests::{SubmitReceipt, TableLoad};

pub enum Msg {
    /// Raw widget values, as read from the DOM. Parsing and widget-level
    /// clamping happen in `update`; the intake itself validates nothing.
    UpdateName(String),
    UpdateScreenTime(String),
    UpdateFocus(String),
    UpdateMood(String),
    UpdateProductivity(String),

    /// Explicit form submission (the only path that persists anything).
    Submit,
    Saved(SubmitReceipt),
    SaveFailed(String),

    /// Result of (re)loading the survey log for the inspection table.
    RecordsLoaded(TableLoad),
    RecordsFailed(String),
}
