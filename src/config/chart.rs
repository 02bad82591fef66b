//! Line chart appearance

pub struct ChartStyle {
    /// Dataset label (only visible in tooltips since the legend is hidden)
    pub series_label: &'static str,
    /// Stroke width of the price line
    pub line_width: f32,
    /// Bezier curve tension (0.0 = straight segments)
    pub tension: f64,
    pub show_legend: bool,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    /// Interpolated points per segment when the curve is smoothed natively
    pub samples_per_segment: usize,
}

pub const CHART_STYLE: ChartStyle = ChartStyle {
    series_label: "Price",
    line_width: 2.0,
    tension: 0.2,
    show_legend: false,
    show_x_axis: true,
    show_y_axis: true,
    samples_per_segment: 8,
};
