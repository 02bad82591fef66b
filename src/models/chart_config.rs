//! Chart.js configuration for a [`LineChartSpec`].

use serde_json::{Value, json};

use crate::models::view::LineChartSpec;

/// Builds the object handed to `new Chart(canvas, config)`.
pub fn chart_js_config(spec: &LineChartSpec) -> Value {
    let style = &spec.style;
    json!({
        "type": "line",
        "data": {
            "labels": spec.labels,
            "datasets": [{
                "label": style.series_label,
                "data": spec.series,
                "borderWidth": style.line_width,
                "tension": style.tension,
            }]
        },
        "options": {
            "plugins": {
                "legend": { "display": style.show_legend }
            },
            "scales": {
                "x": { "display": style.show_x_axis },
                "y": { "display": style.show_y_axis }
            }
        }
    })
}
