//! CoinGecko-specific configuration constants and types.

use std::time::Duration;

/// Runtime configuration for the CoinGecko REST client.
/// Starts from the compile-time defaults; the CLI may override fields.
#[derive(Debug, Clone)]
pub struct CoinGeckoApiConfig {
    pub base_url: String,
    pub vs_currency: String,
    /// `None` means requests may hang indefinitely.
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for CoinGeckoApiConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO.base_url.to_string(),
            vs_currency: COINGECKO.vs_currency.to_string(),
            timeout_ms: COINGECKO.client.timeout_ms,
            user_agent: COINGECKO.client.user_agent.to_string(),
        }
    }
}

impl CoinGeckoApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: Option<u64>,
    pub user_agent: &'static str,
}

/// The Master Configuration Struct
pub struct CoinGeckoConfig {
    /// REST base URL, without trailing slash
    pub base_url: &'static str,
    /// Quote currency for every price series
    pub vs_currency: &'static str,
    pub client: ClientDefaults,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    vs_currency: "usd",
    client: ClientDefaults {
        timeout_ms: None,
        user_agent: concat!("coin-chart/", env!("CARGO_PKG_VERSION")),
    },
};
