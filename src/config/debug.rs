//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. Only consulted under `debug_assertions`,
//! and everything goes through `log::info!`, so nothing shows without `RUST_LOG=info`.

/// Emit the full URL and query of every outbound request.
pub const PRINT_HTTP_REQUESTS: bool = false;

/// Emit first/last timestamp and price range of each fetched OHLC series.
pub const PRINT_SERIES_SUMMARY: bool = true;

/// Emit orchestrator state transitions.
pub const PRINT_STATE_TRANSITIONS: bool = false;
