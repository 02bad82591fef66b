//! Text formatting of the analysis summary and history table

pub struct DisplayConfig {
    /// Literal prefix written in front of the slope value
    pub slope_prefix: &'static str,
    /// Fixed decimals used for the slope
    pub slope_decimals: usize,
    /// Fixed decimals used for the per-row change column
    pub change_decimals: usize,
    /// Change cell shown for the first row (no prior price to diff against)
    pub first_change_placeholder: &'static str,
    /// Blocking notice shown when the form is submitted without a file
    pub no_file_notice: &'static str,
}

pub const DISPLAY: DisplayConfig = DisplayConfig {
    slope_prefix: "Slope: ",
    slope_decimals: 4,
    change_decimals: 2,
    first_change_placeholder: "-",
    no_file_notice: "Choose CSV",
};
