use anyhow::anyhow;
use eframe::egui::{self, CentralPanel, Color32};
use egui_plot::{AxisHints, HPlacement, Plot};

use crate::config::CHART;
use crate::domain::{Candle, CandleType};
use crate::models::OhlcSeries;
use crate::ui::chart_layers::{BodyLayer, LayerContext, PlotLayer, WickLayer};
use crate::ui::utils::{chart_heading, setup_chart_visuals};
use crate::utils::format_price;
use crate::utils::time_utils::{self, TimeUtils};

/// Resolution of the time-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLabelFormat {
    HourMinute,
    Date,
}

impl TimeLabelFormat {
    /// Intraday labels only for the one day window.
    pub fn for_window_days(window_days: u32) -> Self {
        if window_days == 1 {
            TimeLabelFormat::HourMinute
        } else {
            TimeLabelFormat::Date
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            TimeLabelFormat::HourMinute => TimeUtils::INTRADAY_TIME_FORMAT,
            TimeLabelFormat::Date => TimeUtils::STANDARD_TIME_FORMAT,
        }
    }

    /// Label for a plot x coordinate (epoch seconds, UTC)
    pub fn format(self, epoch_secs: f64) -> String {
        time_utils::epoch_secs_f64_to_label(epoch_secs, self.pattern())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub up_color: Color32,
    pub down_color: Color32,
    pub wick_width: f32,
    pub body_outline_width: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            up_color: CHART.up_color,
            down_color: CHART.down_color,
            wick_width: CHART.wick_width,
            body_outline_width: CHART.body_outline_width,
        }
    }
}

impl ChartStyle {
    pub fn color_for(&self, candle: &Candle) -> Color32 {
        match candle.get_type() {
            CandleType::Bullish => self.up_color,
            CandleType::Bearish => self.down_color,
        }
    }
}

/// One candlestick chart: the series plus everything derived for drawing it.
pub struct CandleChart {
    series: OhlcSeries,
    title: String,
    label_format: TimeLabelFormat,
    style: ChartStyle,
}

impl CandleChart {
    pub fn new(series: OhlcSeries, title: impl Into<String>, window_days: u32) -> Self {
        Self {
            series,
            title: title.into(),
            label_format: TimeLabelFormat::for_window_days(window_days),
            style: ChartStyle::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn label_format(&self) -> TimeLabelFormat {
        self.label_format
    }

    pub fn series(&self) -> &OhlcSeries {
        &self.series
    }

    pub fn body_half_width(&self) -> f64 {
        let spacing = self
            .series
            .median_spacing_secs()
            .unwrap_or(CHART.single_candle_spacing_secs);
        spacing * CHART.body_width_fraction / 2.0
    }

    /// Time span covered by the bodies. Does not assume the candles are sorted.
    pub fn x_bounds(&self) -> (f64, f64) {
        let half = self.body_half_width();
        let (first, last) = self.series.candles().iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), c| {
                let x = c.timestamp_secs_f64();
                (lo.min(x), hi.max(x))
            },
        );
        (first - half, last + half)
    }

    /// Price range with headroom. A flat series still gets a visible band.
    pub fn y_bounds(&self) -> (f64, f64) {
        let (lo, hi) = self.series.price_range();
        let span = hi - lo;
        let pad = if span > 0.0 {
            span * CHART.y_padding_pct
        } else if hi > 0.0 {
            hi * CHART.y_padding_pct
        } else {
            1.0
        };
        (lo - pad, hi + pad)
    }

    /// Readout for the candle nearest the pointer
    pub fn hover_text(&self, x: f64) -> String {
        let candle = self.series.nearest_candle(x);
        format!(
            "{}\nOpen: {}\nHigh: {}\nLow: {}\nClose: {}",
            candle.timestamp.format("%Y-%m-%d %H:%M UTC"),
            format_price(candle.open_price),
            format_price(candle.high_price),
            format_price(candle.low_price),
            format_price(candle.close_price),
        )
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let (x_min, x_max) = self.x_bounds();
        let (y_min, y_max) = self.y_bounds();

        Plot::new("candlestick_chart")
            .custom_x_axes(vec![create_x_axis(self.label_format)])
            .custom_y_axes(vec![create_y_axis()])
            .label_formatter(|_, point| self.hover_text(point.x))
            .include_x(x_min)
            .include_x(x_max)
            .include_y(y_min)
            .include_y(y_max)
            .show(ui, |plot_ui| {
                let ctx = LayerContext {
                    series: &self.series,
                    style: &self.style,
                    body_half_width: self.body_half_width(),
                };

                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> = vec![Box::new(WickLayer), Box::new(BodyLayer)];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

impl eframe::App for CandleChart {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_chart_visuals(ctx);

        CentralPanel::default().show(ctx, |ui| {
            ui.heading(chart_heading(&self.title));
            ui.add_space(4.0);
            self.show(ui);
        });
    }
}

fn create_x_axis(label_format: TimeLabelFormat) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(CHART.x_axis_label)
        .formatter(move |grid_mark, _range| label_format.format(grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(CHART.y_axis_label)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}

/// Displays a finished series. Implementations block until the viewer is done.
pub trait ChartRenderer {
    fn render_candlestick(
        &self,
        series: OhlcSeries,
        title: &str,
        window_days: u32,
    ) -> anyhow::Result<()>;
}

/// Opens a native window and returns once it is closed.
pub struct NativeChartRenderer;

impl ChartRenderer for NativeChartRenderer {
    fn render_candlestick(
        &self,
        series: OhlcSeries,
        title: &str,
        window_days: u32,
    ) -> anyhow::Result<()> {
        let chart = CandleChart::new(series, title, window_days);
        log::info!(
            "Opening chart '{}' ({} candles, {:?} labels)",
            title,
            chart.series().len(),
            chart.label_format()
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(CHART.window_size)
                .with_title(title),
            ..Default::default()
        };

        eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(chart))))
            .map_err(|e| anyhow!("chart window failed: {}", e))
    }
}
