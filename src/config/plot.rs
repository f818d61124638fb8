//! Chart visualization configuration

use eframe::egui::Color32;

pub struct ChartConfig {
    /// Close >= open
    pub up_color: Color32,
    /// Close < open
    pub down_color: Color32,
    /// Width of the high/low wick line
    pub wick_width: f32,
    /// Width of the body outline
    pub body_outline_width: f32,
    /// Fraction of the candle spacing covered by the body (0.0..1.0)
    pub body_width_fraction: f64,
    /// Fallback candle spacing when the series has a single candle (seconds)
    pub single_candle_spacing_secs: f64,
    /// Native window size in logical pixels (width, height)
    pub window_size: [f32; 2],
    pub y_axis_label: &'static str,
    pub x_axis_label: &'static str,
    /// Extra headroom above/below the price range as a fraction of the range
    pub y_padding_pct: f64,
}

pub const CHART: ChartConfig = ChartConfig {
    up_color: Color32::from_rgb(0, 128, 0),  // Green
    down_color: Color32::from_rgb(255, 0, 0), // Red
    wick_width: 1.0,
    body_outline_width: 1.0,
    body_width_fraction: 0.6,
    single_candle_spacing_secs: 1800.0,
    window_size: [1200.0, 800.0],
    y_axis_label: "Price (USD)",
    x_axis_label: "Time (UTC)",
    y_padding_pct: 0.05,
};
