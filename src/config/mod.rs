//! Configuration module for the coin chart application.

pub mod coingecko;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;

// Re-export commonly used items
pub use coingecko::{COINGECKO, CoinGeckoApiConfig};
pub use plot::PLOT_CONFIG;
