/// Fixed user-facing text for the terminal session and the chart window
#[derive(Clone, Copy)]
pub struct UiText {
    pub asset_prompt: &'static str,
    pub window_prompt: &'static str,
    pub snapshot_error: &'static str,
    pub historical_error: &'static str,
    pub unexpected_error: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    asset_prompt: "Select a cryptocurrency:",
    window_prompt: "Select historical data period (days):",
    snapshot_error: "Error fetching current prices",
    historical_error: "Error fetching historical data for",
    unexpected_error: "An unexpected error occurred",
};

impl UiText {
    pub fn progress_line(&self, asset_name: &str, days: u32) -> String {
        format!("Fetching {} data for last {} days...", asset_name, days)
    }

    pub fn chart_title(&self, asset_name: &str, days: u32) -> String {
        format!("{} - Last {} Days", asset_name, days)
    }
}
