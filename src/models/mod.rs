// Domain models for the price chart
// These modules contain pure logic independent of UI/visualization

pub mod chart_spec;
pub mod price_data;
pub mod price_series;
pub mod summary;

// Re-export key types for convenience
pub use chart_spec::{ChartSpec, Dataset, Rgba, SeriesStyle, TimeAxisSpec, TimeTicks, ValueAxisSpec};
pub use price_data::PriceData;
pub use price_series::{NormalizedPoint, PriceSeries, RawPricePoint};
pub use summary::{PercentChange, PriceStats, PriceSummary};
