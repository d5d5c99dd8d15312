use async_trait::async_trait;
use serde::Deserialize;

use crate::config::CoinGeckoApiConfig;
use crate::data::FetchError;
use crate::domain::{Coin, Timeframe};
use crate::models::RawPricePoint;

/// Anything that can produce a raw USD price history for a coin.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn market_chart(
        &self,
        coin: Coin,
        timeframe: Timeframe,
    ) -> Result<Vec<RawPricePoint>, FetchError>;

    /// A unique identifier for this implementation (so the logs say which one answered).
    fn signature(&self) -> &'static str;
}

/// `GET /coins/{id}/market_chart` response. Only `prices` is used;
/// `market_caps` and `total_volumes` are ignored.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(f64, f64)>,
}

/// Parses a market_chart body into raw points, preserving provider order.
pub fn parse_market_chart(body: &str) -> Result<Vec<RawPricePoint>, FetchError> {
    let response: MarketChartResponse = serde_json::from_str(body)?;
    response
        .prices
        .into_iter()
        .map(|(timestamp, price)| {
            if !timestamp.is_finite() || !price.is_finite() {
                return Err(FetchError::Malformed(format!(
                    "non-finite entry [{}, {}]",
                    timestamp, price
                )));
            }
            Ok(RawPricePoint::new(timestamp as i64, price))
        })
        .collect()
}

pub struct CoinGeckoClient {
    http: reqwest::Client,
    config: CoinGeckoApiConfig,
}

impl CoinGeckoClient {
    pub fn new(config: CoinGeckoApiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CoinGeckoApiConfig {
        &self.config
    }

    pub fn market_chart_url(&self, coin: Coin, timeframe: Timeframe) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.config.base_url.trim_end_matches('/'),
            coin.api_id(),
            self.config.vs_currency,
            timeframe.days()
        )
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    fn signature(&self) -> &'static str {
        "CoinGecko API"
    }

    async fn market_chart(
        &self,
        coin: Coin,
        timeframe: Timeframe,
    ) -> Result<Vec<RawPricePoint>, FetchError> {
        let url = self.market_chart_url(coin, timeframe);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_market_chart(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base_url: &str) -> CoinGeckoClient {
        let config = CoinGeckoApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        CoinGeckoClient::new(config).unwrap()
    }

    #[test]
    fn builds_market_chart_url() {
        let client = client_with_base("https://api.coingecko.com/api/v3");
        assert_eq!(
            client.market_chart_url(Coin::Ripple, Timeframe::OneYear),
            "https://api.coingecko.com/api/v3/coins/ripple/market_chart?vs_currency=usd&days=365"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_ignored() {
        let client = client_with_base("http://localhost:8080/api/v3/");
        assert_eq!(
            client.market_chart_url(Coin::Bitcoin, Timeframe::OneDay),
            "http://localhost:8080/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=1"
        );
    }

    #[test]
    fn parses_prices_in_provider_order() {
        let body = r#"{
            "prices": [[1700000300000, 37000.5], [1700000000000, 36950.25]],
            "market_caps": [[1700000000000, 1.0]],
            "total_volumes": []
        }"#;
        let points = parse_market_chart(body).unwrap();
        assert_eq!(
            points,
            vec![
                RawPricePoint::new(1_700_000_300_000, 37000.5),
                RawPricePoint::new(1_700_000_000_000, 36950.25),
            ]
        );
    }

    #[test]
    fn empty_prices_is_not_an_error() {
        assert_eq!(parse_market_chart(r#"{"prices": []}"#), Ok(vec![]));
    }

    #[test]
    fn missing_prices_is_malformed() {
        let err = parse_market_chart(r#"{"error": "coin not found"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn non_numeric_entry_is_malformed() {
        let err = parse_market_chart(r#"{"prices": [[1700000000000, "abc"]]}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(
            parse_market_chart("<html>rate limited</html>"),
            Err(FetchError::Malformed(_))
        ));
    }
}
