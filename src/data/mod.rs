// Data loading from the remote price provider
pub mod coingecko;
pub mod error;
pub mod fetch;

// Re-export commonly used types
pub use coingecko::{CoinGeckoClient, PriceSource};
pub use error::FetchError;
pub use fetch::fetch_price_data;

#[cfg(test)]
pub(crate) mod mock;
