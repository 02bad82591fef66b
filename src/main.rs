#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = price_trend_view::utils::logging::init_web_logging(log::LevelFilter::Debug);

    log::info!("🚀 Price Trend Viewer starting in WASM mode...");

    // B. Bind the upload form on the host page
    price_trend_view::web::mount()
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
// Window state (last CSV path) is stored here between runs
const APP_STATE_PATH: &str = ".price_trend_view_state.json";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use eframe::NativeOptions;
    use price_trend_view::{Cli, run_app, ui::UI_TEXT, utils::logging::init_native_logging};
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    init_native_logging();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for upload requests (driven from poll-promise threads)
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let handle = rt.handle().clone();

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, args, handle))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {}", e))
}
