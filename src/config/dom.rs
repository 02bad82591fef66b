//! Element identifiers the browser build binds to.
//!
//! These must match `index.html`.

pub struct DomIds {
    pub form: &'static str,
    pub file_input: &'static str,
    pub canvas: &'static str,
    pub trend: &'static str,
    pub slope: &'static str,
    pub highest: &'static str,
    pub lowest: &'static str,
    pub average: &'static str,
    pub count: &'static str,
    /// Selector for the body of the history table
    pub history_body_selector: &'static str,
}

pub const DOM_IDS: DomIds = DomIds {
    form: "uploadForm",
    file_input: "file",
    canvas: "chart",
    trend: "trend",
    slope: "slope",
    highest: "highest",
    lowest: "lowest",
    average: "average",
    count: "count",
    history_body_selector: "#historyTable tbody",
};
