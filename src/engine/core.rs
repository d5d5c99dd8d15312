use std::sync::Arc;
use std::time::Instant;

use poll_promise::Promise;
use tokio::runtime::Handle;

use crate::config::DEBUG_FLAGS;
use crate::data::{FetchError, PriceSource, fetch_price_data};
use crate::domain::{Coin, Selection, Timeframe};
use crate::models::PriceData;

use super::messages::{FetchOutcome, FetchTicket};
use super::state::ViewState;

/// Holds the selection and the latest accepted price data.
///
/// Every selection change issues exactly one fetch tagged with a fresh token.
/// Fetches are never cancelled, but when they complete only the one carrying
/// the most recently issued token is applied; everything older is dropped.
pub struct ChartEngine {
    source: Arc<dyn PriceSource>,
    runtime: Handle,
    state: ViewState,

    /// Token of the most recently issued fetch (0 = none yet)
    last_token: u64,
    /// Outstanding fetches keyed by token. Superseded ones stay here until they
    /// resolve, since a running request cannot be cancelled.
    in_flight: Vec<(u64, Promise<FetchOutcome>)>,
}

impl ChartEngine {
    pub fn new(source: Arc<dyn PriceSource>, runtime: Handle, selection: Selection) -> Self {
        Self {
            source,
            runtime,
            state: ViewState::new(selection),
            last_token: 0,
            in_flight: Vec::new(),
        }
    }

    /// Issues the fetch for the startup selection.
    pub fn start(&mut self) -> u64 {
        self.issue_fetch("initial load")
    }

    // --- ACCESSORS ---

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    /// `None` while the first fetch is outstanding (or if it failed).
    pub fn price_data(&self) -> Option<&Arc<PriceData>> {
        self.state.price_data.as_ref()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.state.last_error.as_ref()
    }

    pub fn latest_token(&self) -> u64 {
        self.last_token
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// True while the most recently issued fetch has not resolved.
    /// Superseded fetches that are still running do not count.
    pub fn is_loading(&self) -> bool {
        self.in_flight.iter().any(|(token, _)| *token == self.last_token)
    }

    pub fn source_signature(&self) -> &'static str {
        self.source.signature()
    }

    // --- SELECTION UPDATES ---

    pub fn set_coin(&mut self, coin: Coin) -> bool {
        self.set_selection(self.state.selection.with_coin(coin))
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> bool {
        self.set_selection(self.state.selection.with_timeframe(timeframe))
    }

    /// Returns true (and fetches) only if the selection actually changed.
    pub fn set_selection(&mut self, selection: Selection) -> bool {
        if selection == self.state.selection {
            return false;
        }
        self.state.selection = selection;
        self.issue_fetch("selection changed");
        true
    }

    /// Polls outstanding fetches and applies whatever completed.
    /// Returns TRUE while the latest fetch is still in flight, so the UI keeps repainting.
    pub fn update(&mut self) -> bool {
        let mut completed = Vec::new();
        for (token, promise) in std::mem::take(&mut self.in_flight) {
            match promise.try_take() {
                Ok(outcome) => completed.push(outcome),
                Err(promise) => self.in_flight.push((token, promise)),
            }
        }

        for outcome in completed {
            self.handle_outcome(outcome);
        }

        self.is_loading()
    }

    // --- INTERNAL LOGIC ---

    fn issue_fetch(&mut self, reason: &str) -> u64 {
        self.last_token += 1;
        let ticket = FetchTicket {
            token: self.last_token,
            selection: self.state.selection,
        };

        log::info!(
            "Fetching {} (token {}, {})",
            ticket.selection,
            ticket.token,
            reason
        );

        let source = Arc::clone(&self.source);
        let runtime = self.runtime.clone();
        let promise =
            Promise::spawn_thread("price_fetch", move || run_fetch(source, runtime, ticket));
        self.in_flight.push((ticket.token, promise));

        ticket.token
    }

    fn handle_outcome(&mut self, outcome: FetchOutcome) {
        let FetchOutcome {
            ticket,
            result,
            elapsed,
        } = outcome;

        if ticket.token != self.last_token {
            if DEBUG_FLAGS.print_stale_discards {
                log::info!(
                    "Discarding stale result for {} (token {}, latest {})",
                    ticket.selection,
                    ticket.token,
                    self.last_token
                );
            }
            return;
        }

        match result {
            Ok(data) => {
                if DEBUG_FLAGS.print_fetch_timings {
                    log::info!(
                        "✅ {} points for {} in {:.2}s",
                        data.series.len(),
                        ticket.selection,
                        elapsed.as_secs_f32()
                    );
                }

                self.state.update_buffer(data);
            }
            Err(e) => {
                // Silent towards the view: keep whatever was shown before.
                log::warn!("Error fetching price data for {}: {}", ticket.selection, e);
                self.state.last_error = Some(e);
            }
        }
    }
}

fn run_fetch(source: Arc<dyn PriceSource>, runtime: Handle, ticket: FetchTicket) -> FetchOutcome {
    let start = Instant::now();
    let result = runtime.block_on(fetch_price_data(source.as_ref(), ticket.selection));
    FetchOutcome {
        ticket,
        result,
        elapsed: start.elapsed(),
    }
}
