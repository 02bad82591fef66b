// src/utils/app_time.rs

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

// std::time::Instant panics on wasm32-unknown-unknown
#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}

/// Milliseconds since `start`, for request timing in logs.
pub fn elapsed_ms(start: AppInstant) -> u128 {
    start.elapsed().as_millis()
}
