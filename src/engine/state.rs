use std::sync::Arc;
use std::time::Instant;

use crate::data::FetchError;
use crate::domain::Selection;
use crate::models::PriceData;

/// What the UI reads every frame.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub selection: Selection,

    /// The front buffer. `None` until the first fetch succeeds.
    /// An accepted result replaces the Arc; a failed one leaves it alone.
    pub price_data: Option<Arc<PriceData>>,

    /// Last failure of a current (non-stale) fetch. Logged, never rendered.
    pub last_error: Option<FetchError>,
    pub last_update_time: Option<Instant>,
}

impl ViewState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    /// Promotes a completed fetch to the front buffer.
    pub fn update_buffer(&mut self, data: PriceData) {
        self.price_data = Some(Arc::new(data));
        self.last_error = None;
        self.last_update_time = Some(Instant::now());
    }
}
