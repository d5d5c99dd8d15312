use std::time::Instant;

use crate::data::{FetchError, PriceSource};
use crate::domain::Selection;
use crate::models::PriceData;

/// Fetch-and-Transform: one request, one atomic `PriceData`.
pub async fn fetch_price_data(
    source: &dyn PriceSource,
    selection: Selection,
) -> Result<PriceData, FetchError> {
    let start = Instant::now();
    let raw = source
        .market_chart(selection.coin, selection.timeframe)
        .await?;
    let data = PriceData::from_raw(selection, &raw)?;

    log::debug!(
        "{} returned {} points for {} in {:?}",
        source.signature(),
        data.series.len(),
        selection,
        start.elapsed()
    );
    Ok(data)
}
