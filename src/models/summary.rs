use std::fmt;

use super::price_series::PriceSeries;
use crate::utils::format::format_fixed2;

/// Percentage change from the first price. Undefined when the first price is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentChange {
    Value(f64),
    NotAvailable,
}

impl PercentChange {
    pub fn from_prices(first: f64, change: f64) -> Self {
        if first == 0.0 {
            return PercentChange::NotAvailable;
        }
        let pct = change / first * 100.0;
        if pct.is_finite() {
            PercentChange::Value(pct)
        } else {
            PercentChange::NotAvailable
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            PercentChange::Value(v) => Some(*v),
            PercentChange::NotAvailable => None,
        }
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentChange::Value(v) => write!(f, "{}", format_fixed2(*v)),
            PercentChange::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// Scalar metrics derived from a non-empty series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub current_price: f64,
    pub high_price: f64,
    pub price_change: f64,
    pub percentage_change: PercentChange,
}

impl PriceStats {
    /// Two-decimal percentage, or "N/A".
    pub fn percentage_change_str(&self) -> String {
        self.percentage_change.to_string()
    }

    pub fn is_up(&self) -> bool {
        self.price_change >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceSummary {
    /// The provider returned an empty series.
    NoData,
    Available(PriceStats),
}

impl PriceSummary {
    pub fn from_series(series: &PriceSeries) -> Self {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return PriceSummary::NoData;
        };

        let current_price = last.y;
        let high_price = series.prices().fold(f64::NEG_INFINITY, f64::max);
        let price_change = current_price - first.y;

        PriceSummary::Available(PriceStats {
            current_price,
            high_price,
            price_change,
            percentage_change: PercentChange::from_prices(first.y, price_change),
        })
    }

    pub fn stats(&self) -> Option<&PriceStats> {
        match self {
            PriceSummary::Available(stats) => Some(stats),
            PriceSummary::NoData => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::price_series::RawPricePoint;

    fn series(prices: &[f64]) -> PriceSeries {
        let raw: Vec<RawPricePoint> = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| RawPricePoint::new(1_700_000_000_000 + i as i64 * 60_000, p))
            .collect();
        PriceSeries::from_raw(&raw).unwrap()
    }

    #[test]
    fn three_point_scenario() {
        let summary = PriceSummary::from_series(&series(&[100.0, 150.0, 120.0]));
        let stats = summary.stats().unwrap();

        assert_eq!(stats.current_price, 120.0);
        assert_eq!(stats.high_price, 150.0);
        assert_eq!(stats.price_change, 20.0);
        assert_eq!(stats.percentage_change_str(), "20.00");
        assert!(stats.is_up());
    }

    #[test]
    fn empty_series_is_no_data() {
        assert_eq!(PriceSummary::from_series(&series(&[])), PriceSummary::NoData);
    }

    #[test]
    fn zero_first_price_reports_not_available() {
        let summary = PriceSummary::from_series(&series(&[0.0, 50.0]));
        let stats = summary.stats().unwrap();

        assert_eq!(stats.price_change, 50.0);
        assert_eq!(stats.percentage_change, PercentChange::NotAvailable);
        assert_eq!(stats.percentage_change_str(), "N/A");
    }

    #[test]
    fn current_is_last_and_high_is_max_for_arbitrary_series() {
        let cases: [&[f64]; 4] = [
            &[5.0],
            &[3.0, 1.0, 2.0],
            &[0.07, 0.071, 0.0695, 0.0702],
            &[64_000.5, 65_100.25, 63_900.0, 64_800.75, 64_799.0],
        ];
        for prices in cases {
            let stats = *PriceSummary::from_series(&series(prices)).stats().unwrap();
            let expected_high = prices.iter().cloned().fold(f64::MIN, f64::max);
            assert_eq!(stats.current_price, *prices.last().unwrap());
            assert_eq!(stats.high_price, expected_high);
            assert_eq!(stats.price_change, prices[prices.len() - 1] - prices[0]);
        }
    }

    #[test]
    fn falling_series_has_negative_rounded_percentage() {
        let stats = *PriceSummary::from_series(&series(&[300.0, 299.0])).stats().unwrap();
        assert!(!stats.is_up());
        // -1/300 * 100 = -0.3333...
        assert_eq!(stats.percentage_change_str(), "-0.33");
    }

    #[test]
    fn half_hundredth_percentage_rounds_up() {
        // 1/800 * 100 = 0.125 exactly
        let stats = *PriceSummary::from_series(&series(&[800.0, 801.0])).stats().unwrap();
        assert_eq!(stats.percentage_change_str(), "0.13");
    }
}
