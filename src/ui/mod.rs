// Desktop user interface (native builds only)
pub mod app;
pub mod config;
pub mod panels;
pub mod plot_view;
pub mod styles;

// Re-export main app
pub use app::{AppSettings, TrendViewerApp};
pub use config::{UI_CONFIG, UI_TEXT};
