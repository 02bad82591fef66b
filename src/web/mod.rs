//! Browser front end: wires the upload form to an [`UploadController`].

pub mod chart_js;
pub mod dom_view;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlCanvasElement, HtmlInputElement};

use crate::config::DOM_IDS;
use crate::data::{AnalysisClient, FetchAnalysisClient};
use crate::engine::UploadController;
use chart_js::ChartJsBackend;
use dom_view::{DomView, element_by_id};

pub use chart_js::ChartJsHandle;

/// Controller and view share one cell; it is never borrowed across an await.
struct PageState {
    controller: UploadController<ChartJsBackend>,
    view: DomView,
}

/// Binds to the page described by [`DOM_IDS`] and installs the submit listener.
pub fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let form = element_by_id(&document, DOM_IDS.form)?;
    let file_input = element_by_id(&document, DOM_IDS.file_input)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| "file input was not an HtmlInputElement")?;
    let canvas = element_by_id(&document, DOM_IDS.canvas)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| "chart element was not a valid HtmlCanvasElement")?;

    let state = Rc::new(RefCell::new(PageState {
        controller: UploadController::new(ChartJsBackend::new(canvas)),
        view: DomView::bind_default(window, document)?,
    }));
    let client = Rc::new(FetchAnalysisClient::default());

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();

        let selected = file_input.files().and_then(|files| files.item(0));
        let started = {
            let mut page = state.borrow_mut();
            let PageState { controller, view } = &mut *page;
            controller.begin(selected, view)
        };
        let Ok((submission, file)) = started else {
            return;
        };

        let state = Rc::clone(&state);
        let client = Rc::clone(&client);
        spawn_local(async move {
            let response = client.analyze(file).await;
            let mut page = state.borrow_mut();
            let PageState { controller, view } = &mut *page;
            controller.complete(submission, response, view);
        });
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // The listener lives as long as the page
    on_submit.forget();

    log::info!("🚀 Upload form bound to {}", crate::config::ENDPOINT.analyze_path);
    Ok(())
}
