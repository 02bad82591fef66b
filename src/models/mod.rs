// Payload and view models
// Pure data: nothing in here touches the DOM, egui or the network.

pub mod analysis;
pub mod chart_config;
pub mod view;

// Re-export key types for convenience
pub use analysis::{AnalysisResult, ValidationError};
pub use view::{AnalysisView, HistoryColumn, HistoryRow, LineChartSpec, LineStyle, SummaryFields};
