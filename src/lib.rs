#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::CoinGeckoApiConfig;
pub use data::{CoinGeckoClient, FetchError, PriceSource, fetch_price_data};
pub use domain::{Coin, Selection, Timeframe};
pub use engine::ChartEngine;
pub use models::{ChartSpec, PriceData, PriceSummary};
pub use ui::CoinChartApp;

// CLI argument parsing
use clap::Parser;

use crate::domain::timeframe::parse_timeframe_days;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Coin shown at startup
    #[arg(long, value_enum, default_value_t = Coin::Bitcoin)]
    pub coin: Coin,

    /// Days of history shown at startup (1, 7, 30 or 365)
    #[arg(long, value_parser = parse_timeframe_days, default_value = "7")]
    pub days: Timeframe,

    /// Override the CoinGecko REST base URL
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Per-request timeout; requests never time out when omitted
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl Cli {
    pub fn selection(&self) -> Selection {
        Selection::new(self.coin, self.days)
    }

    /// Compile-time defaults with any CLI overrides applied.
    pub fn api_config(&self) -> CoinGeckoApiConfig {
        let mut config = CoinGeckoApiConfig::default();
        if let Some(url) = &self.api_base_url {
            config.base_url = url.clone();
        }
        if self.timeout_ms.is_some() {
            config.timeout_ms = self.timeout_ms;
        }
        config
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, mut engine: ChartEngine) -> Box<dyn eframe::App> {
    // Visuals are set once here, not every frame
    ui::utils::initialize_rendering(&cc.egui_ctx);

    engine.start();
    Box::new(ui::CoinChartApp::new(engine))
}
