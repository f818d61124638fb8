use eframe::egui::{Context, RichText, Visuals};

/// Bold chart title shown above the plot
pub fn chart_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).strong()
}

/// Classic light chart look on a white background
pub fn setup_chart_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.panel_fill = eframe::egui::Color32::WHITE;
    ctx.set_visuals(visuals);
}
