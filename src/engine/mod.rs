pub mod core;
pub mod state;

// Re-export key components
pub use self::core::{SessionEngine, exit_status, failure_message, is_classified};
pub use state::Step;
