// Domain types and value objects
pub mod coin;
pub mod selection;
pub mod timeframe;

// Re-export commonly used types
pub use coin::Coin;
pub use selection::Selection;
pub use timeframe::{TimeUnit, Timeframe};
