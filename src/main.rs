#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

use coin_chart::config::DEBUG_FLAGS;
use coin_chart::ui::config::UI_TEXT;
use coin_chart::{ChartEngine, Cli, CoinGeckoClient, run_app};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    if DEBUG_FLAGS.print_ui_interactions {
        log::info!("Parsed arguments: {:?}", args);
    }

    // C. Runtime + client. Fetch threads borrow the runtime through its handle.
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let client = CoinGeckoClient::new(args.api_config()).context("Failed to build HTTP client")?;
    let engine = ChartEngine::new(Arc::new(client), rt.handle().clone(), args.selection());
    log::info!(
        "🚀 Coin Chart starting with {} (source: {})",
        args.selection(),
        engine.source_signature()
    );

    // D. Run Native App
    eframe::run_native(
        UI_TEXT.window_title,
        NativeOptions::default(),
        Box::new(move |cc| Ok(run_app(cc, engine))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {e}"))
}
