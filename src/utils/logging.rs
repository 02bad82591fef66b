//! Logger setup for both targets. Everything else logs through the `log` facade.

#[cfg(not(target_arch = "wasm32"))]
pub fn init_native_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

/// Routes `log` records to the browser console, one console level per log level.
#[cfg(target_arch = "wasm32")]
pub fn init_web_logging(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use wasm_bindgen::JsValue;

    fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.target(), message))
        })
        .chain(fern::Output::call(|record| {
            let line = JsValue::from_str(&record.args().to_string());
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&line),
                log::Level::Warn => web_sys::console::warn_1(&line),
                log::Level::Info => web_sys::console::info_1(&line),
                _ => web_sys::console::log_1(&line),
            }
        }))
        .apply()
}
