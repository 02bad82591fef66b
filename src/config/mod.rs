//! Configuration module for the price trend viewer.

pub mod chart;
pub mod display;
pub mod dom;
pub mod endpoint;

mod debug; // Private: callers go through the re-export as crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use chart::{CHART_STYLE, ChartStyle};
pub use display::{DISPLAY, DisplayConfig};
pub use dom::{DOM_IDS, DomIds};
pub use endpoint::{DEFAULT_SERVER_URL, ENDPOINT, EndpointConfig};
