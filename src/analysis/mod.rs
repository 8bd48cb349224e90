pub mod charts;
pub mod consumption;
pub mod metrics;

pub use charts::{chart_data, daily_variation};
pub use consumption::derive_consumption;
pub use metrics::{analysis_metrics, weekly_averages};

use chrono::{Datelike, Duration, NaiveDate};

/// Round to 2 decimals, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Monday of the ISO week containing `date`.
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(-1.006), -1.01);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(2.675001), 2.68);
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-03 is a Wednesday, its week starts 2024-01-01
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(
            week_start(wednesday),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );

        // A Monday is its own week start
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(week_start(monday), monday);

        // A Sunday belongs to the week starting six days earlier
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(
            week_start(sunday),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
