pub mod chart_slot;
pub mod core;
pub mod error;
pub mod messages;
pub mod view_port;

// Re-export key components
pub use chart_slot::{ChartBackend, ChartHandle, ChartSlot};
pub use core::UploadController;
pub use error::UploadError;
pub use messages::{Submission, SubmissionOutcome};
pub use view_port::ResultView;
