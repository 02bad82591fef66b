//! Pure mapping from an [`AnalysisResult`] to what each front end displays.
//!
//! Front ends only copy these strings and series into their widgets, so the
//! formatting rules live (and are tested) here.

use itertools::izip;
use std::fmt;

use crate::config::{CHART_STYLE, ChartStyle, DISPLAY};
use crate::models::analysis::AnalysisResult;

/// The six summary slots, already formatted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryFields {
    pub trend: String,
    pub slope: String,
    pub highest: String,
    pub lowest: String,
    pub average: String,
    pub count: String,
}

/// One line of the history table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub price: String,
    pub change: String,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, strum_macros::EnumIter)]
pub enum HistoryColumn {
    Date,
    Price,
    Change,
}

impl fmt::Display for HistoryColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HistoryColumn::Date => write!(f, "Date"),
            HistoryColumn::Price => write!(f, "Price"),
            HistoryColumn::Change => write!(f, "Change"),
        }
    }
}

impl HistoryRow {
    pub fn cell(&self, column: HistoryColumn) -> &str {
        match column {
            HistoryColumn::Date => &self.date,
            HistoryColumn::Price => &self.price,
            HistoryColumn::Change => &self.change,
        }
    }
}

/// Presentation options of the price line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub series_label: String,
    pub line_width: f32,
    pub tension: f64,
    pub show_legend: bool,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
}

impl From<&ChartStyle> for LineStyle {
    fn from(style: &ChartStyle) -> Self {
        Self {
            series_label: style.series_label.to_string(),
            line_width: style.line_width,
            tension: style.tension,
            show_legend: style.show_legend,
            show_x_axis: style.show_x_axis,
            show_y_axis: style.show_y_axis,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::from(&CHART_STYLE)
    }
}

/// Everything a chart backend needs to draw one line chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChartSpec {
    /// Category axis labels
    pub labels: Vec<String>,
    pub series: Vec<f64>,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub summary: SummaryFields,
    pub chart: LineChartSpec,
    pub rows: Vec<HistoryRow>,
}

impl AnalysisView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            summary: summary_fields(result),
            chart: line_chart_spec(result),
            rows: history_rows(result),
        }
    }
}

/// Fixed-point rendering, e.g. `fixed(0.12345, 4) == "0.1235"`.
///
/// Exact halfway values round away from zero (`fixed(0.125, 2) == "0.13"`),
/// the same as the page's `Number.prototype.toFixed`. Negative zero prints
/// without a sign.
pub fn fixed(value: f64, decimals: usize) -> String {
    let magnitude = value.abs();
    if !magnitude.is_finite() || magnitude >= 1e21 {
        return plain_number(value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, fixed_magnitude(magnitude, decimals))
}

fn fixed_magnitude(magnitude: f64, decimals: usize) -> String {
    // A tie needs the binary fraction to end within decimals + 1 places,
    // in which case that rendering is exact.
    let scaled = magnitude * 2f64.powi(decimals as i32 + 1);
    if scaled.fract() == 0.0 {
        let exact = format!("{:.*}", decimals + 1, magnitude);
        if let Some(head) = exact.strip_suffix('5') {
            return round_up_last_digit(head.trim_end_matches('.'));
        }
    }
    format!("{:.*}", decimals, magnitude)
}

/// `"0.12"` becomes `"0.13"`, `"9.99"` becomes `"10.00"`.
fn round_up_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = (d as u8 + 1) as char;
                return chars.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(chars).collect()
}

/// Shortest decimal rendering: `105.0` shows as `105`, `101.2` as `101.2`.
///
/// Magnitudes below `1e-6` or from `1e21` up switch to exponent form
/// (`1e-7`, `1e+21`) the way the page's number-to-string does.
pub fn plain_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }
    let exponent = format!("{:e}", value);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exponent,
    }
}

pub fn slope_text(slope: f64) -> String {
    format!("{}{}", DISPLAY.slope_prefix, fixed(slope, DISPLAY.slope_decimals))
}

pub fn summary_fields(result: &AnalysisResult) -> SummaryFields {
    SummaryFields {
        trend: result.trend.clone(),
        slope: slope_text(result.slope),
        highest: plain_number(result.highest),
        lowest: plain_number(result.lowest),
        average: plain_number(result.average),
        count: result.count.to_string(),
    }
}

pub fn history_rows(result: &AnalysisResult) -> Vec<HistoryRow> {
    izip!(&result.dates, &result.prices, &result.changes)
        .take(result.count)
        .enumerate()
        .map(|(i, (date, price, change))| HistoryRow {
            date: date.clone(),
            price: plain_number(*price),
            change: if i == 0 {
                DISPLAY.first_change_placeholder.to_string()
            } else {
                fixed(*change, DISPLAY.change_decimals)
            },
        })
        .collect()
}

pub fn line_chart_spec(result: &AnalysisResult) -> LineChartSpec {
    LineChartSpec {
        labels: result.dates.clone(),
        series: result.prices.clone(),
        style: LineStyle::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::tests::sample_result;
    use strum::IntoEnumIterator;

    #[test]
    fn scenario_summary_matches_backend_values() {
        let view = AnalysisView::from_result(&sample_result());
        assert_eq!(
            view.summary,
            SummaryFields {
                trend: "upward".into(),
                slope: "Slope: 0.0321".into(),
                highest: "105".into(),
                lowest: "98".into(),
                average: "101.2".into(),
                count: "3".into(),
            }
        );
    }

    #[test]
    fn scenario_rows_use_placeholder_for_first_change() {
        let rows = history_rows(&sample_result());
        let cells: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|r| (r.date.as_str(), r.price.as_str(), r.change.as_str()))
            .collect();
        assert_eq!(
            cells,
            vec![("d1", "98", "-"), ("d2", "100", "2.00"), ("d3", "105", "5.00")]
        );
    }

    #[test]
    fn row_count_follows_count() {
        let mut result = sample_result();
        result.count = 10;
        result.dates = (0..10).map(|i| format!("day{}", i)).collect();
        result.prices = (0..10).map(|i| 100.0 + i as f64).collect();
        result.changes = vec![0.0, -1.25, 0.5, 3.0, -0.004, 0.0, 10.0, 0.125, -0.125, -0.0];

        let rows = history_rows(&result);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].change, "-");
        for (i, row) in rows.iter().enumerate().skip(1) {
            assert_eq!(row.change, fixed(result.changes[i], DISPLAY.change_decimals));
        }
        assert_eq!(rows[1].change, "-1.25");
        assert_eq!(rows[4].change, "-0.00");
        assert_eq!(rows[7].change, "0.13");
        assert_eq!(rows[8].change, "-0.13");
        assert_eq!(rows[9].change, "0.00");
    }

    #[test]
    fn slope_always_has_prefix_and_four_decimals() {
        assert_eq!(slope_text(0.12345), "Slope: 0.1235");
        assert_eq!(slope_text(0.0), "Slope: 0.0000");
        assert_eq!(slope_text(-2.5), "Slope: -2.5000");
        assert_eq!(slope_text(1234.56789), "Slope: 1234.5679");
        assert_eq!(slope_text(0.03125), "Slope: 0.0313");
        assert_eq!(slope_text(-0.03125), "Slope: -0.0313");
        assert_eq!(slope_text(-0.0), "Slope: 0.0000");

        for slope in [0.1, -0.333333, 42.0, 1e-9, 98765.4321] {
            let text = slope_text(slope);
            let digits = text.strip_prefix("Slope: ").unwrap();
            let decimals = digits.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 4, "{}", text);
        }
    }

    #[test]
    fn halfway_values_round_away_from_zero() {
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(-0.125, 2), "-0.13");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(9.5, 0), "10");
        assert_eq!(fixed(99.875, 2), "99.88");
        assert_eq!(fixed(9.995, 2), "9.99"); // stored just below the tie
        assert_eq!(fixed(-0.0, 2), "0.00");
        assert_eq!(fixed(1e21, 2), "1e+21");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(plain_number(1e-7), "1e-7");
        assert_eq!(plain_number(-2.5e-8), "-2.5e-8");
        assert_eq!(plain_number(1e21), "1e+21");
        assert_eq!(plain_number(1.5e300), "1.5e+300");
        assert_eq!(plain_number(0.000001), "0.000001");
        assert_eq!(plain_number(123456789.0), "123456789");
        assert_eq!(plain_number(-0.0), "0");
    }

    #[test]
    fn empty_result_builds_empty_view() {
        let result = AnalysisResult {
            trend: "NO DATA".into(),
            slope: 0.0,
            highest: 0.0,
            lowest: 0.0,
            average: 0.0,
            count: 0,
            dates: vec![],
            prices: vec![],
            changes: vec![],
        };
        let view = AnalysisView::from_result(&result);
        assert!(view.rows.is_empty());
        assert!(view.chart.labels.is_empty());
        assert!(view.chart.series.is_empty());
        assert_eq!(view.summary.count, "0");
    }

    #[test]
    fn chart_spec_uses_dates_and_prices() {
        let spec = line_chart_spec(&sample_result());
        assert_eq!(spec.labels, vec!["d1", "d2", "d3"]);
        assert_eq!(spec.series, vec![98.0, 100.0, 105.0]);
        assert!(!spec.style.show_legend);
        assert!(spec.style.show_x_axis && spec.style.show_y_axis);
        assert_eq!(spec.style.line_width, 2.0);
        assert_eq!(spec.style.tension, 0.2);
    }

    #[test]
    fn columns_read_matching_cells() {
        let rows = history_rows(&sample_result());
        let headers: Vec<String> = HistoryColumn::iter().map(|c| c.to_string()).collect();
        assert_eq!(headers, vec!["Date", "Price", "Change"]);
        let second: Vec<&str> = HistoryColumn::iter().map(|c| rows[1].cell(c)).collect();
        assert_eq!(second, vec!["d2", "100", "2.00"]);
    }
}
