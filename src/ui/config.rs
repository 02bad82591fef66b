use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub value: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub price_line: Color32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Height given to the chart before the table takes the rest
    pub chart_height: f32,
    pub side_panel_width: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        value: Color32::WHITE,
        error: Color32::from_rgb(255, 100, 100),
        warning: Color32::from_rgb(255, 215, 0),
        price_line: Color32::from_rgb(54, 162, 235), // Chart.js default blue
    },
    chart_height: 320.0,
    side_panel_width: 220.0,
};

/// Every user-visible string of the desktop window.
pub struct UiText {
    pub window_title: &'static str,
    pub file_label: &'static str,
    pub file_hint: &'static str,
    pub analyze_button: &'static str,
    pub summary_heading: &'static str,
    pub history_heading: &'static str,
    pub trend_label: &'static str,
    pub highest_label: &'static str,
    pub lowest_label: &'static str,
    pub average_label: &'static str,
    pub count_label: &'static str,
    pub rendered_at_label: &'static str,
    pub no_analysis_yet: &'static str,
    pub notice_title: &'static str,
    pub notice_ok: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Price Trend Viewer",
    file_label: "CSV file:",
    file_hint: "path/to/prices.csv",
    analyze_button: "Analyze",
    summary_heading: "Summary",
    history_heading: "History",
    trend_label: "Trend",
    highest_label: "Highest",
    lowest_label: "Lowest",
    average_label: "Average",
    count_label: "Count",
    rendered_at_label: "Analyzed at",
    no_analysis_yet: "Choose a CSV file and press Analyze.",
    notice_title: "Notice",
    notice_ok: "OK",
    x_axis: "Date",
    y_axis: "Price",
};
