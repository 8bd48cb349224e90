use super::{round2, week_start};
use crate::models::{ChartPoint, ConsumptionReading, Period, VariationPoint};

const MAX_DAILY_POINTS: usize = 30;
const MAX_PERIOD_BUCKETS: usize = 12;

/// Chart-ready series for the requested period. Daily is one point per
/// reading; weekly and monthly group by bucket key in first-occurrence
/// order (the mapping is never re-sorted by date), summing consumption
/// per bucket.
pub fn chart_data(readings: &[ConsumptionReading], period: Period) -> Vec<ChartPoint> {
    if period == Period::Daily {
        let points: Vec<ChartPoint> = readings
            .iter()
            .map(|r| ChartPoint {
                label: r.date.format("%b %-d").to_string(),
                consumption: r.consumption,
            })
            .collect();
        return take_last(points, MAX_DAILY_POINTS);
    }

    let mut buckets: Vec<(String, f64)> = Vec::new();
    for r in readings {
        let key = match period {
            Period::Weekly => week_start(r.date).format("%b %-d").to_string(),
            Period::Monthly => r.date.format("%b %Y").to_string(),
            Period::Daily => unreachable!(),
        };
        match buckets.iter_mut().find(|(label, _)| *label == key) {
            Some((_, sum)) => *sum += r.consumption,
            None => buckets.push((key, r.consumption)),
        }
    }

    let points: Vec<ChartPoint> = buckets
        .into_iter()
        .map(|(label, sum)| ChartPoint {
            label,
            consumption: round2(sum),
        })
        .collect();
    take_last(points, MAX_PERIOD_BUCKETS)
}

/// Day-over-day change in consumption between adjacent readings.
/// Same-calendar-day pairs are skipped without re-chaining: the next
/// comparison still uses the literal previous array entry.
pub fn daily_variation(readings: &[ConsumptionReading]) -> Vec<VariationPoint> {
    if readings.len() < 2 {
        return Vec::new();
    }

    let mut sorted: Vec<&ConsumptionReading> = readings.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut points = Vec::new();
    for pair in sorted.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        if current.date != previous.date {
            points.push(VariationPoint {
                date: current.date.format("%b %-d").to_string(),
                variation: round2(current.consumption - previous.consumption),
            });
        }
    }

    take_last(points, MAX_DAILY_POINTS)
}

fn take_last<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    if items.len() > n {
        items.drain(..items.len() - n);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn consumption_reading(date: &str, consumption: f64) -> ConsumptionReading {
        ConsumptionReading {
            id: Uuid::new_v4(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            value: 0.0,
            consumption,
        }
    }

    #[test]
    fn test_daily_one_point_per_reading() {
        let readings = vec![
            consumption_reading("2024-01-01", 0.0),
            consumption_reading("2024-01-02", 10.0),
        ];
        let points = chart_data(&readings, Period::Daily);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Jan 1");
        assert_eq!(points[1].label, "Jan 2");
        assert_eq!(points[1].consumption, 10.0);
    }

    #[test]
    fn test_daily_truncates_to_most_recent_30() {
        let readings: Vec<ConsumptionReading> = (0..40)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i);
                consumption_reading(&date.format("%Y-%m-%d").to_string(), (i + 1) as f64)
            })
            .collect();
        let points = chart_data(&readings, Period::Daily);
        assert_eq!(points.len(), 30);
        // The first 10 points were dropped
        assert_eq!(points[0].consumption, 11.0);
    }

    #[test]
    fn test_weekly_groups_by_week_start() {
        let readings = vec![
            consumption_reading("2024-01-01", 3.0),
            consumption_reading("2024-01-03", 4.0),
            consumption_reading("2024-01-08", 5.0),
        ];
        let points = chart_data(&readings, Period::Weekly);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Jan 1");
        assert_eq!(points[0].consumption, 7.0);
        assert_eq!(points[1].label, "Jan 8");
        assert_eq!(points[1].consumption, 5.0);
    }

    #[test]
    fn test_weekly_bucket_order_is_first_occurrence() {
        // Second week appears first in the input; bucket order follows
        let readings = vec![
            consumption_reading("2024-01-08", 5.0),
            consumption_reading("2024-01-01", 3.0),
            consumption_reading("2024-01-09", 1.0),
        ];
        let points = chart_data(&readings, Period::Weekly);
        assert_eq!(points[0].label, "Jan 8");
        assert_eq!(points[0].consumption, 6.0);
        assert_eq!(points[1].label, "Jan 1");
    }

    #[test]
    fn test_monthly_groups_and_truncates_to_12() {
        let mut readings = Vec::new();
        for year in [2022, 2023] {
            for month in 1..=12 {
                readings.push(consumption_reading(
                    &format!("{}-{:02}-15", year, month),
                    1.5,
                ));
            }
        }
        let points = chart_data(&readings, Period::Monthly);
        assert_eq!(points.len(), 12);
        assert_eq!(points[0].label, "Jan 2023");
        assert_eq!(points[11].label, "Dec 2023");
    }

    #[test]
    fn test_monthly_sums_are_rounded() {
        let readings = vec![
            consumption_reading("2024-01-05", 1.111),
            consumption_reading("2024-01-20", 2.222),
        ];
        let points = chart_data(&readings, Period::Monthly);
        assert_eq!(points[0].consumption, 3.33);
    }

    #[test]
    fn test_variation_requires_two_readings() {
        assert!(daily_variation(&[]).is_empty());
        assert!(daily_variation(&[consumption_reading("2024-01-01", 5.0)]).is_empty());
    }

    #[test]
    fn test_variation_between_consecutive_days() {
        let readings = vec![
            consumption_reading("2024-01-01", 10.0),
            consumption_reading("2024-01-02", 15.0),
        ];
        let points = daily_variation(&readings);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "Jan 2");
        assert_eq!(points[0].variation, 5.0);
    }

    #[test]
    fn test_variation_skips_same_day_without_rechaining() {
        // Two readings on Jan 2: the duplicate pair emits nothing, and
        // the Jan 3 point diffs against the second Jan 2 entry.
        let readings = vec![
            consumption_reading("2024-01-01", 10.0),
            consumption_reading("2024-01-02", 15.0),
            consumption_reading("2024-01-02", 2.0),
            consumption_reading("2024-01-03", 8.0),
        ];
        let points = daily_variation(&readings);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].variation, 5.0);
        assert_eq!(points[1].date, "Jan 3");
        assert_eq!(points[1].variation, 6.0);
    }

    #[test]
    fn test_variation_truncates_to_30() {
        let readings: Vec<ConsumptionReading> = (1..=35)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i);
                consumption_reading(&date.format("%Y-%m-%d").to_string(), i as f64)
            })
            .collect();
        let points = daily_variation(&readings);
        assert_eq!(points.len(), 30);
    }
}
