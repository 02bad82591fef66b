//! Browser transport: `FormData` + `fetch`, awaited through wasm-bindgen-futures.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::ENDPOINT;
use crate::data::client::{AnalysisClient, decode_response};
use crate::engine::UploadError;
use crate::models::AnalysisResult;

/// Posts to the page's own origin unless a base URL is given.
#[derive(Debug, Clone)]
pub struct FetchAnalysisClient {
    url: String,
}

impl Default for FetchAnalysisClient {
    fn default() -> Self {
        Self::new("")
    }
}

impl FetchAnalysisClient {
    pub fn new(base: &str) -> Self {
        Self {
            url: ENDPOINT.analyze_url(base),
        }
    }
}

fn js_error(value: JsValue) -> UploadError {
    let message = value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&value)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| "unknown JavaScript error".to_string());
    UploadError::Network(message)
}

#[async_trait(?Send)]
impl AnalysisClient for FetchAnalysisClient {
    type Upload = File;

    async fn analyze(&self, file: File) -> Result<AnalysisResult, UploadError> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!("📤 POST {} ({}, {} bytes)", self.url, file.name(), file.size());
        }

        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(ENDPOINT.file_field, &file, &file.name())
            .map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);
        let request = Request::new_with_str_and_init(&self.url, &init).map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| UploadError::Network("no window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let status = response.status();
        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        decode_response(status, &body)
    }
}
