use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{DOM_IDS, DomIds};
use crate::engine::{ResultView, UploadError};
use crate::models::{HistoryRow, SummaryFields};

/// The summary slots and history table body of the page.
pub struct DomView {
    window: Window,
    document: Document,
    trend: Element,
    slope: Element,
    highest: Element,
    lowest: Element,
    average: Element,
    count: Element,
    history_body: Element,
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

impl DomView {
    /// Resolves every element up front so a broken page fails at start-up, not on submit.
    pub fn bind(window: Window, document: Document, ids: &DomIds) -> Result<Self, JsValue> {
        let history_body = document
            .query_selector(ids.history_body_selector)?
            .ok_or_else(|| {
                JsValue::from_str(&format!("missing element {}", ids.history_body_selector))
            })?;

        Ok(Self {
            trend: element_by_id(&document, ids.trend)?,
            slope: element_by_id(&document, ids.slope)?,
            highest: element_by_id(&document, ids.highest)?,
            lowest: element_by_id(&document, ids.lowest)?,
            average: element_by_id(&document, ids.average)?,
            count: element_by_id(&document, ids.count)?,
            history_body,
            window,
            document,
        })
    }

    pub fn bind_default(window: Window, document: Document) -> Result<Self, JsValue> {
        Self::bind(window, document, &DOM_IDS)
    }

    fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            log::warn!("alert() unavailable: {}", message);
        }
    }

    fn build_row(&self, row: &HistoryRow) -> Result<Element, JsValue> {
        let tr = self.document.create_element("tr")?;
        for text in [&row.date, &row.price, &row.change] {
            let td = self.document.create_element("td")?;
            td.set_text_content(Some(text));
            tr.append_child(&td)?;
        }
        Ok(tr)
    }
}

impl ResultView for DomView {
    fn notify(&mut self, message: &str) {
        self.alert(message);
    }

    fn show_summary(&mut self, summary: &SummaryFields) {
        self.trend.set_text_content(Some(&summary.trend));
        self.slope.set_text_content(Some(&summary.slope));
        self.highest.set_text_content(Some(&summary.highest));
        self.lowest.set_text_content(Some(&summary.lowest));
        self.average.set_text_content(Some(&summary.average));
        self.count.set_text_content(Some(&summary.count));
    }

    fn show_history(&mut self, rows: &[HistoryRow]) {
        self.history_body.set_inner_html("");
        for row in rows {
            match self.build_row(row) {
                Ok(tr) => {
                    if let Err(e) = self.history_body.append_child(&tr) {
                        log::error!("could not append history row: {:?}", e);
                    }
                }
                Err(e) => log::error!("could not build history row: {:?}", e),
            }
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_view_updates {
            log::info!("History table rebuilt with {} rows", rows.len());
        }
    }

    fn show_error(&mut self, error: &UploadError) {
        self.alert(&error.to_string());
    }

    fn set_busy(&mut self, busy: bool) {
        let Some(body) = self.document.body() else {
            log::warn!("no <body> to mark busy");
            return;
        };
        if let Err(e) = body.set_attribute("aria-busy", if busy { "true" } else { "false" }) {
            log::warn!("could not set aria-busy: {:?}", e);
        }
    }
}
