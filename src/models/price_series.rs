use chrono::{DateTime, Utc};

use crate::data::FetchError;
use crate::utils::maths_utils;
use crate::utils::time_utils::{datetime_to_plot_x, epoch_ms_to_datetime};

/// One `[timestamp_ms, price]` pair exactly as the provider sent it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPricePoint {
    pub timestamp_ms: i64,
    pub price_usd: f64,
}

impl RawPricePoint {
    pub fn new(timestamp_ms: i64, price_usd: f64) -> Self {
        Self {
            timestamp_ms,
            price_usd,
        }
    }
}

/// A point on the chart: wall-clock time against USD price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub x: DateTime<Utc>,
    pub y: f64,
}

impl TryFrom<RawPricePoint> for NormalizedPoint {
    type Error = FetchError;

    fn try_from(raw: RawPricePoint) -> Result<Self, Self::Error> {
        let x = epoch_ms_to_datetime(raw.timestamp_ms).ok_or_else(|| {
            FetchError::Malformed(format!("timestamp out of range: {}", raw.timestamp_ms))
        })?;
        Ok(Self { x, y: raw.price_usd })
    }
}

/// Ordered price points in provider order (assumed chronological, never re-sorted).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<NormalizedPoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<NormalizedPoint>) -> Self {
        Self { points }
    }

    /// 1:1 conversion; fails on the first point whose timestamp cannot be represented.
    pub fn from_raw(raw: &[RawPricePoint]) -> Result<Self, FetchError> {
        let points = raw
            .iter()
            .copied()
            .map(NormalizedPoint::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[NormalizedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&NormalizedPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&NormalizedPoint> {
        self.points.last()
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Lowest and highest price.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        maths_utils::min_max(self.prices())
    }

    /// `[epoch_seconds, price]` pairs for plotting.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [datetime_to_plot_x(&p.x), p.y])
            .collect()
    }
}
