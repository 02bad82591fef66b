pub mod app_time;
pub mod logging;
pub mod maths_utils;
