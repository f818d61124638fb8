// Terminal prompts and the chart window
pub mod chart;
pub mod chart_layers;
pub mod config;
pub mod selector;
pub mod snapshot_table;
pub mod utils;

// Re-export the pieces the orchestrator drives
pub use chart::{CandleChart, ChartRenderer, NativeChartRenderer, TimeLabelFormat};
pub use config::UI_TEXT;
pub use selector::{InvalidSelectionInput, select_option};
pub use snapshot_table::print_snapshot;
