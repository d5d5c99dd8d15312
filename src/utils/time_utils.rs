use chrono::{DateTime, TimeZone, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
}

/// Converts a provider timestamp. `None` when chrono cannot represent it.
pub fn epoch_ms_to_datetime(epoch_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_ms)
}

/// Plot x coordinates are epoch seconds.
pub fn datetime_to_plot_x(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64 / TimeUtils::MS_IN_S as f64
}

pub fn plot_x_to_datetime(x: f64) -> Option<DateTime<Utc>> {
    if !x.is_finite() {
        return None;
    }
    epoch_ms_to_datetime((x * TimeUtils::MS_IN_S as f64).round() as i64)
}

/// Formats a plot x coordinate in the given zone. Empty string for out of range values.
pub fn format_plot_x<Tz>(x: f64, tz: &Tz, fmt: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match plot_x_to_datetime(x) {
        Some(dt) => dt.with_timezone(tz).format(fmt).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_x_round_trips_through_datetime() {
        let dt = epoch_ms_to_datetime(1_700_000_000_000).unwrap();
        let x = datetime_to_plot_x(&dt);
        assert_eq!(x, 1_700_000_000.0);
        assert_eq!(plot_x_to_datetime(x), Some(dt));
    }

    #[test]
    fn formats_in_requested_zone() {
        // 2023-11-14 22:13:20 UTC
        let label = format_plot_x(1_700_000_000.0, &Utc, TimeUtils::STANDARD_TIME_FORMAT);
        assert_eq!(label, "2023-11-14 22:13");
        assert_eq!(format_plot_x(f64::NAN, &Utc, "%H"), "");
    }
}
