use std::time::Duration;

use crate::data::FetchError;
use crate::domain::Selection;
use crate::models::PriceData;

/// Identifies one issued fetch. Tokens increase monotonically per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub selection: Selection,
}

/// What the fetch thread hands back.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<PriceData, FetchError>,
    pub elapsed: Duration,
}
