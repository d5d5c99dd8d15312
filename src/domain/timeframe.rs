use std::fmt;

use crate::utils::TimeUtils;

/// How many days of history to request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum Timeframe {
    OneDay,
    #[default]
    OneWeek,
    OneMonth,
    OneYear,
}

/// Granularity of the time axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Hour,
    Day,
}

impl Timeframe {
    pub const fn days(self) -> u32 {
        match self {
            Timeframe::OneDay => 1,
            Timeframe::OneWeek => 7,
            Timeframe::OneMonth => 30,
            Timeframe::OneYear => 365,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            1 => Some(Timeframe::OneDay),
            7 => Some(Timeframe::OneWeek),
            30 => Some(Timeframe::OneMonth),
            365 => Some(Timeframe::OneYear),
            _ => None,
        }
    }

    /// Short label shown on the timeframe buttons.
    pub fn button_label(self) -> &'static str {
        match self {
            Timeframe::OneDay => "1d",
            Timeframe::OneWeek => "1w",
            Timeframe::OneMonth => "1m",
            Timeframe::OneYear => "1y",
        }
    }

    /// Hourly ticks for a single day, daily ticks for everything longer.
    pub fn time_unit(self) -> TimeUnit {
        match self {
            Timeframe::OneDay => TimeUnit::Hour,
            _ => TimeUnit::Day,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

/// clap value parser for `--days`.
pub fn parse_timeframe_days(arg: &str) -> Result<Timeframe, String> {
    let days: u32 = arg
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of days", arg))?;
    Timeframe::from_days(days).ok_or_else(|| {
        format!(
            "unsupported timeframe: {} days (expected 1, 7, 30 or 365)",
            days
        )
    })
}

impl TimeUnit {
    pub fn step_ms(self) -> i64 {
        match self {
            TimeUnit::Hour => TimeUtils::MS_IN_H,
            TimeUnit::Day => TimeUtils::MS_IN_D,
        }
    }

    /// chrono format string for tick labels ("3PM", "Oct 19").
    pub fn tick_format(self) -> &'static str {
        match self {
            TimeUnit::Hour => "%-I%p",
            TimeUnit::Day => "%b %-d",
        }
    }

    /// Multiples of the base step that make sensible tick spacings.
    pub fn step_multipliers(self) -> &'static [i64] {
        match self {
            TimeUnit::Hour => &[1, 2, 3, 6, 12, 24],
            TimeUnit::Day => &[1, 2, 7, 14, 30, 61, 91, 182, 365],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn days_round_trip_through_from_days() {
        for tf in Timeframe::iter() {
            assert_eq!(Timeframe::from_days(tf.days()), Some(tf));
        }
        assert_eq!(Timeframe::from_days(14), None);
    }

    #[test]
    fn only_one_day_is_hourly() {
        assert_eq!(Timeframe::OneDay.time_unit(), TimeUnit::Hour);
        assert_eq!(Timeframe::OneWeek.time_unit(), TimeUnit::Day);
        assert_eq!(Timeframe::OneMonth.time_unit(), TimeUnit::Day);
        assert_eq!(Timeframe::OneYear.time_unit(), TimeUnit::Day);
    }

    #[test]
    fn parses_cli_days() {
        assert_eq!(parse_timeframe_days("30"), Ok(Timeframe::OneMonth));
        assert!(parse_timeframe_days("2").is_err());
        assert!(parse_timeframe_days("week").is_err());
    }

    #[test]
    fn button_labels_match_ordering() {
        let labels: Vec<&str> = Timeframe::iter().map(Timeframe::button_label).collect();
        assert_eq!(labels, vec!["1d", "1w", "1m", "1y"]);
    }
}
