use eframe::egui::Stroke;
use egui_plot::{Line, PlotPoints, PlotUi, Polygon};

use crate::domain::{Candle, CandleType};
use crate::models::OhlcSeries;
use crate::ui::chart::ChartStyle;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub series: &'a OhlcSeries,
    pub style: &'a ChartStyle,
    /// Half the body width in plot x units (seconds)
    pub body_half_width: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. WICK LAYER (high/low line behind the body)
// ============================================================================
pub struct WickLayer;

impl PlotLayer for WickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for candle in ctx.series.candles() {
            let line = Line::new(series_name(candle), PlotPoints::new(wick_segment(candle).to_vec()))
                .color(ctx.style.color_for(candle))
                .width(ctx.style.wick_width);
            plot_ui.line(line);
        }
    }
}

// ============================================================================
// 2. BODY LAYER (open/close rectangle)
// ============================================================================
pub struct BodyLayer;

impl PlotLayer for BodyLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for candle in ctx.series.candles() {
            let color = ctx.style.color_for(candle);
            let corners = body_corners(candle, ctx.body_half_width);

            // Name passed here groups the bodies per direction
            let polygon = Polygon::new(series_name(candle), PlotPoints::new(corners.to_vec()))
                .fill_color(color)
                .stroke(Stroke::new(ctx.style.body_outline_width, color));

            plot_ui.polygon(polygon);
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn series_name(candle: &Candle) -> &'static str {
    match candle.get_type() {
        CandleType::Bullish => "Up",
        CandleType::Bearish => "Down",
    }
}

/// Vertical segment from low to high at the candle's timestamp.
pub fn wick_segment(candle: &Candle) -> [[f64; 2]; 2] {
    let x = candle.timestamp_secs_f64();
    [[x, candle.low_price], [x, candle.high_price]]
}

/// Body rectangle centred on the timestamp, counter-clockwise from bottom left.
pub fn body_corners(candle: &Candle, half_width: f64) -> [[f64; 2]; 4] {
    let x = candle.timestamp_secs_f64();
    let (bottom, top) = candle.body_range();
    [
        [x - half_width, bottom],
        [x + half_width, bottom],
        [x + half_width, top],
        [x - half_width, top],
    ]
}
