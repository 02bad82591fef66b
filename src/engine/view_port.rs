use crate::engine::error::UploadError;
use crate::models::{HistoryRow, SummaryFields};

/// The surfaces a front end exposes to the controller.
///
/// Implementations only copy what they are given; all formatting has already
/// happened in [`crate::models::view`].
pub trait ResultView {
    /// Blocking notice (`alert` in the browser, a modal window natively).
    fn notify(&mut self, message: &str);

    fn show_summary(&mut self, summary: &SummaryFields);

    /// Replaces every row of the history table.
    fn show_history(&mut self, rows: &[HistoryRow]);

    fn show_error(&mut self, error: &UploadError);

    fn set_busy(&mut self, _busy: bool) {}
}
