// Domain types and value objects
pub mod asset;
pub mod candle;
pub mod window;

// Re-export commonly used types
pub use asset::{AssetDescriptor, Catalog, CatalogError};
pub use candle::{Candle, CandleType};
pub use window::HistoryWindow;
