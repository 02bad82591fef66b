// Core modules
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod utils;

// Desktop window (egui)
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;

// Browser page binding (DOM + Chart.js)
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types
pub use data::AnalysisClient;
pub use engine::{ResultView, SubmissionOutcome, UploadController, UploadError};
pub use models::{AnalysisResult, AnalysisView, ValidationError};
pub use utils::app_time;

#[cfg(not(target_arch = "wasm32"))]
pub use ui::{AppSettings, TrendViewerApp};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root URL of the analysis service
    #[arg(long, default_value = config::DEFAULT_SERVER_URL)]
    pub server: String,

    /// CSV file to pre-fill in the path field
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Submit the pre-filled file as soon as the window opens
    #[arg(long, default_value_t = false)]
    pub analyze_on_start: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app(
    cc: &eframe::CreationContext,
    args: Cli,
    runtime: tokio::runtime::Handle,
) -> Box<dyn eframe::App> {
    let settings = AppSettings {
        server: args.server,
        initial_file: args.file,
        analyze_on_start: args.analyze_on_start,
    };
    Box::new(TrendViewerApp::new(cc, settings, runtime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_local_server() {
        let args = Cli::parse_from(["price-trend-view"]);
        assert_eq!(args.server, "http://127.0.0.1:5000");
        assert!(args.file.is_none());
        assert!(!args.analyze_on_start);
    }

    #[test]
    fn cli_reads_file_and_flags() {
        let args = Cli::parse_from([
            "price-trend-view",
            "--server",
            "http://analysis.local:8080",
            "--file",
            "prices.csv",
            "--analyze-on-start",
        ]);
        assert_eq!(args.server, "http://analysis.local:8080");
        assert_eq!(args.file, Some(PathBuf::from("prices.csv")));
        assert!(args.analyze_on_start);
    }
}
