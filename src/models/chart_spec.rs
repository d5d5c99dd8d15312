//! Renderer-neutral description of the chart.
//!
//! The price logic hands a [`ChartSpec`] to the UI; only `ui::ui_plot_view`
//! translates it into plotting-library calls.

use crate::config::PLOT_CONFIG;
use crate::domain::{Selection, TimeUnit};

use super::price_series::PriceSeries;

/// Plain 8-bit RGBA color (unmultiplied alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub border_color: Rgba,
    pub fill_color: Rgba,
    pub fill: bool,
    pub tension: f32,
    pub line_width: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            border_color: PLOT_CONFIG.line_color,
            fill_color: PLOT_CONFIG.fill_color,
            fill: PLOT_CONFIG.fill_enabled,
            tension: PLOT_CONFIG.tension,
            line_width: PLOT_CONFIG.line_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    /// `[epoch_seconds, price]`
    pub points: Vec<[f64; 2]>,
    pub style: SeriesStyle,
}

/// Tick positions (epoch seconds) and the spacing between them.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTicks {
    pub step: f64,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxisSpec {
    pub title: &'static str,
    pub unit: TimeUnit,
}

impl TimeAxisSpec {
    /// Ticks aligned to whole units (in the zone given by `utc_offset_secs`),
    /// spaced by the smallest multiple of the unit that keeps at most `max_ticks`.
    pub fn ticks(
        &self,
        min_x: f64,
        max_x: f64,
        max_ticks: usize,
        utc_offset_secs: i64,
    ) -> TimeTicks {
        let base = (self.unit.step_ms() / 1000) as f64;
        if !min_x.is_finite() || !max_x.is_finite() || max_x <= min_x || max_ticks == 0 {
            return TimeTicks {
                step: base,
                values: Vec::new(),
            };
        }

        let span = max_x - min_x;
        let multipliers = self.unit.step_multipliers();
        let multiplier = match multipliers
            .iter()
            .copied()
            .find(|&m| span / (base * m as f64) <= max_ticks as f64)
        {
            Some(m) => m as f64,
            None => {
                let widest = multipliers.last().copied().unwrap_or(1) as f64;
                widest * (span / (base * widest * max_ticks as f64)).ceil()
            }
        };
        let step = base * multiplier;

        let offset = utc_offset_secs as f64;
        let mut value = ((min_x + offset) / step).ceil() * step - offset;
        let mut values = Vec::new();
        while value <= max_x {
            values.push(value);
            value += step;
        }

        TimeTicks { step, values }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxisSpec {
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub dataset: Dataset,
    pub x_axis: TimeAxisSpec,
    pub y_axis: ValueAxisSpec,
    pub show_legend: bool,
}

impl ChartSpec {
    /// Pure mapping from the view state to what the renderer needs.
    pub fn build(selection: &Selection, series: Option<&PriceSeries>) -> Self {
        Self {
            dataset: Dataset {
                label: format!("{} Price (USD)", selection.coin.display_name()),
                points: series.map(PriceSeries::plot_points).unwrap_or_default(),
                style: SeriesStyle::default(),
            },
            x_axis: TimeAxisSpec {
                title: PLOT_CONFIG.x_axis_title,
                unit: selection.timeframe.time_unit(),
            },
            y_axis: ValueAxisSpec {
                title: PLOT_CONFIG.y_axis_title,
            },
            show_legend: PLOT_CONFIG.show_legend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coin, Timeframe};
    use crate::models::price_series::RawPricePoint;

    const HOUR: f64 = 3_600.0;
    const DAY: f64 = 86_400.0;

    #[test]
    fn one_day_requests_hourly_axis() {
        let spec = ChartSpec::build(&Selection::new(Coin::Ethereum, Timeframe::OneDay), None);
        assert_eq!(spec.x_axis.unit, TimeUnit::Hour);
        assert_eq!(spec.dataset.label, "Ethereum Price (USD)");
        assert!(spec.dataset.points.is_empty());
    }

    #[test]
    fn longer_timeframes_request_daily_axis() {
        for tf in [Timeframe::OneWeek, Timeframe::OneMonth, Timeframe::OneYear] {
            let spec = ChartSpec::build(&Selection::new(Coin::Bitcoin, tf), None);
            assert_eq!(spec.x_axis.unit, TimeUnit::Day);
        }
    }

    #[test]
    fn build_carries_points_and_style() {
        let series = PriceSeries::from_raw(&[
            RawPricePoint::new(1_000, 1.0),
            RawPricePoint::new(2_000, 2.0),
        ])
        .unwrap();
        let spec = ChartSpec::build(&Selection::default(), Some(&series));

        assert_eq!(spec.dataset.points, vec![[1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(spec.dataset.style.border_color, Rgba::from_rgb(0xb5, 0x2c, 0xff));
        assert!(spec.dataset.style.fill);
        assert!(!spec.show_legend);
        assert_eq!(spec.x_axis.title, "Time");
        assert_eq!(spec.y_axis.title, "Price (USD)");
    }

    #[test]
    fn hourly_ticks_align_to_hour_boundaries() {
        let axis = TimeAxisSpec {
            title: "Time",
            unit: TimeUnit::Hour,
        };
        // 24h window starting 10 minutes past an hour
        let start = 1_700_000_000.0 - (1_700_000_000.0 % HOUR) + 600.0;
        let ticks = axis.ticks(start, start + DAY, 10, 0);

        assert_eq!(ticks.step, 3.0 * HOUR);
        assert!(ticks.values.len() <= 10);
        assert!(ticks.values.iter().all(|v| v % HOUR == 0.0));
        assert!(ticks.values.iter().all(|v| *v >= start && *v <= start + DAY));
    }

    #[test]
    fn daily_ticks_respect_offset_and_cap() {
        let axis = TimeAxisSpec {
            title: "Time",
            unit: TimeUnit::Day,
        };
        let start = 1_700_000_000.0;
        let offset = 2 * 3_600;
        let ticks = axis.ticks(start, start + 365.0 * DAY, 10, offset);

        assert!(ticks.values.len() <= 10);
        assert!(!ticks.values.is_empty());
        assert!(ticks.values.iter().all(|v| (v + offset as f64) % DAY == 0.0));
    }

    #[test]
    fn seven_days_gets_a_tick_per_day() {
        let axis = TimeAxisSpec {
            title: "Time",
            unit: TimeUnit::Day,
        };
        let start = 1_699_920_000.0; // midnight UTC
        let ticks = axis.ticks(start, start + 7.0 * DAY, 10, 0);
        assert_eq!(ticks.step, DAY);
        assert_eq!(ticks.values.len(), 8);
    }

    #[test]
    fn degenerate_range_has_no_ticks() {
        let axis = TimeAxisSpec {
            title: "Time",
            unit: TimeUnit::Day,
        };
        assert!(axis.ticks(5.0, 5.0, 10, 0).values.is_empty());
        assert!(axis.ticks(f64::NAN, 5.0, 10, 0).values.is_empty());
    }
}
