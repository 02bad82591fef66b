//! Chart.js binding. The page loads Chart.js as a global (`window.Chart`).

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::engine::{ChartBackend, ChartHandle, UploadError};
use crate::models::LineChartSpec;
use crate::models::chart_config::chart_js_config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartJs);
}

pub struct ChartJsHandle {
    chart: ChartJs,
}

impl ChartHandle for ChartJsHandle {
    fn dispose(self) {
        self.chart.destroy();
    }
}

/// Draws into a fixed canvas element.
pub struct ChartJsBackend {
    canvas: HtmlCanvasElement,
}

impl ChartJsBackend {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ChartBackend for ChartJsBackend {
    type Handle = ChartJsHandle;

    fn create(&mut self, spec: &LineChartSpec) -> Result<ChartJsHandle, UploadError> {
        // JSON.parse gives plain objects; Chart.js does not accept JS Maps
        let json = chart_js_config(spec).to_string();
        let config = js_sys::JSON::parse(&json)
            .map_err(|_| UploadError::Chart("could not build chart config".into()))?;
        let chart = ChartJs::new(&self.canvas, &config).map_err(|e| {
            UploadError::Chart(e.as_string().unwrap_or_else(|| "is Chart.js loaded?".into()))
        })?;
        Ok(ChartJsHandle { chart })
    }
}
