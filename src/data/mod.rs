// Transport to the analysis service

pub mod client;
pub mod upload;

#[cfg(not(target_arch = "wasm32"))]
pub mod http_client;

#[cfg(target_arch = "wasm32")]
pub mod fetch_client;

// Re-export commonly used types
pub use client::{AnalysisClient, decode_response};
pub use upload::CsvUpload;

#[cfg(not(target_arch = "wasm32"))]
pub use http_client::HttpAnalysisClient;

#[cfg(target_arch = "wasm32")]
pub use fetch_client::FetchAnalysisClient;
