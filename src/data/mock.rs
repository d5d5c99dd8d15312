//! In-memory `PriceSource` for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::data::{FetchError, PriceSource};
use crate::domain::{Coin, Timeframe};
use crate::models::RawPricePoint;

#[derive(Clone)]
struct Scripted {
    result: Result<Vec<RawPricePoint>, FetchError>,
    delay: Duration,
}

/// Answers per coin with a canned result after an optional delay.
/// Coins without a script answer with a transport failure.
#[derive(Default)]
pub struct MockSource {
    scripts: Mutex<HashMap<Coin, Scripted>>,
    calls: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prices(self, coin: Coin, prices: &[f64], delay_ms: u64) -> Self {
        let raw = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| RawPricePoint::new(1_700_000_000_000 + i as i64 * 300_000, p))
            .collect();
        self.script(coin, Ok(raw), delay_ms)
    }

    pub fn with_error(self, coin: Coin, error: FetchError, delay_ms: u64) -> Self {
        self.script(coin, Err(error), delay_ms)
    }

    fn script(
        self,
        coin: Coin,
        result: Result<Vec<RawPricePoint>, FetchError>,
        delay_ms: u64,
    ) -> Self {
        if let Ok(mut scripts) = self.scripts.lock() {
            scripts.insert(
                coin,
                Scripted {
                    result,
                    delay: Duration::from_millis(delay_ms),
                },
            );
        }
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for MockSource {
    fn signature(&self) -> &'static str {
        "Mock"
    }

    async fn market_chart(
        &self,
        coin: Coin,
        _timeframe: Timeframe,
    ) -> Result<Vec<RawPricePoint>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self
            .scripts
            .lock()
            .ok()
            .and_then(|scripts| scripts.get(&coin).cloned());

        match scripted {
            Some(s) => {
                if !s.delay.is_zero() {
                    tokio::time::sleep(s.delay).await;
                }
                s.result
            }
            None => Err(FetchError::Transport(format!("no script for {}", coin))),
        }
    }
}
