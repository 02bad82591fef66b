use eframe::egui;
use egui_plot::{AxisHints, HPlacement, Legend, Line, Plot, PlotPoints};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::CHART_STYLE;
use crate::engine::{ChartBackend, ChartHandle, UploadError};
use crate::models::{LineChartSpec, LineStyle};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::maths_utils::{Point, indexed_points, smooth_polyline};

/// An immutable chart model built once per analysis; egui redraws it every frame.
#[derive(Debug, Clone)]
pub struct PlotChart {
    pub id: u64,
    pub labels: Vec<String>,
    /// Data points at integer x positions (one per label)
    pub points: Vec<Point>,
    /// `points` after curve smoothing; this is what gets drawn
    pub curve: Vec<Point>,
    pub style: LineStyle,
}

impl ChartHandle for PlotChart {
    fn dispose(self) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_chart_lifecycle {
            log::info!("Released plot model #{} ({} points)", self.id, self.points.len());
        }
    }
}

#[derive(Default)]
pub struct PlotBackend {
    next_id: u64,
}

impl ChartBackend for PlotBackend {
    type Handle = PlotChart;

    fn create(&mut self, spec: &LineChartSpec) -> Result<PlotChart, UploadError> {
        self.next_id += 1;
        let points = indexed_points(&spec.series);
        let curve = smooth_polyline(&points, spec.style.tension, CHART_STYLE.samples_per_segment);
        Ok(PlotChart {
            id: self.next_id,
            labels: spec.labels.clone(),
            points,
            curve,
            style: spec.style.clone(),
        })
    }
}

/// Category label for an x grid mark; marks between categories stay blank.
pub fn category_label(labels: &[String], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    labels.get(nearest as usize).cloned().unwrap_or_default()
}

pub fn show_price_chart(ui: &mut egui::Ui, chart: &PlotChart) {
    let labels = chart.labels.clone();
    let x_axis = AxisHints::new_x()
        .label(UI_TEXT.x_axis)
        .formatter(move |grid_mark, _range| category_label(&labels, grid_mark.value));
    let y_axis = AxisHints::new_y()
        .label(UI_TEXT.y_axis)
        .placement(HPlacement::Left);

    let mut plot = Plot::new(("price_chart", chart.id))
        .height(UI_CONFIG.chart_height)
        .show_axes([chart.style.show_x_axis, chart.style.show_y_axis])
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .allow_scroll(false)
        .allow_boxed_zoom(false);
    if chart.style.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        let line = Line::new(
            chart.style.series_label.clone(),
            PlotPoints::new(chart.curve.clone()),
        )
        .color(UI_CONFIG.colors.price_line)
        .width(chart.style.line_width);
        plot_ui.line(line);
    });
}
