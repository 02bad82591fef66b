use crate::engine::error::UploadError;
use crate::utils::app_time::{AppInstant, now};

/// Ticket for a submission that has passed the file check and is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub id: u64,
    started_at: AppInstant,
}

impl Submission {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            started_at: now(),
        }
    }

    pub fn started_at(&self) -> AppInstant {
        self.started_at
    }
}

/// What a completed submission did to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Summary, chart and table were replaced; `rows` lines in the table
    Rendered { rows: usize },
    /// Nothing new was rendered; the error was shown to the user
    Rejected(UploadError),
    /// A newer submission started before this one finished, so its result was dropped
    Superseded { id: u64 },
}

impl SubmissionOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmissionOutcome::Rendered { .. })
    }
}
