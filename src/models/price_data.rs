use chrono::{DateTime, Utc};

use crate::data::FetchError;
use crate::domain::Selection;

use super::price_series::{PriceSeries, RawPricePoint};
use super::summary::PriceSummary;

/// The atomic result of one fetch: the series plus the summary derived from it.
/// Replaced wholesale on every accepted fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceData {
    /// The selection this data was fetched for
    pub selection: Selection,
    pub series: PriceSeries,
    pub summary: PriceSummary,
    pub fetched_at: DateTime<Utc>,
}

impl PriceData {
    pub fn from_raw(selection: Selection, raw: &[RawPricePoint]) -> Result<Self, FetchError> {
        let series = PriceSeries::from_raw(raw)?;
        let summary = PriceSummary::from_series(&series);
        Ok(Self {
            selection,
            series,
            summary,
            fetched_at: Utc::now(),
        })
    }
}
