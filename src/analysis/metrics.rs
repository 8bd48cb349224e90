use super::{round2, week_start};
use crate::models::{AnalysisMetrics, ConsumptionReading, PeakDay, WeeklyAverages};
use chrono::{Datelike, Duration, NaiveDate};

/// Summary metrics over a consumption-annotated set, relative to
/// `as_of`. Empty input yields all-zero metrics and no peak day.
pub fn analysis_metrics(readings: &[ConsumptionReading], as_of: NaiveDate) -> AnalysisMetrics {
    let seven_days_ago = as_of - Duration::days(7);
    let this_week_start = week_start(as_of);
    let this_week_end = this_week_start + Duration::days(6);

    let recent: Vec<&ConsumptionReading> = readings
        .iter()
        .filter(|r| r.date > seven_days_ago)
        .collect();
    let daily_average = if recent.is_empty() {
        0.0
    } else {
        recent.iter().map(|r| r.consumption).sum::<f64>() / recent.len() as f64
    };

    let mut weekly_total = 0.0;
    let mut monthly_total = 0.0;
    let mut peak: Option<PeakDay> = None;

    for r in readings {
        if r.date >= this_week_start && r.date <= this_week_end {
            weekly_total += r.consumption;
        }

        if r.date.year() == as_of.year() && r.date.month() == as_of.month() {
            monthly_total += r.consumption;
        }

        // Strictly greater, so the first maximum seen wins ties
        let is_new_peak = match &peak {
            Some(p) => r.consumption > p.value,
            None => true,
        };
        if is_new_peak {
            peak = Some(PeakDay {
                date: r.date,
                value: r.consumption,
            });
        }
    }

    AnalysisMetrics {
        daily_average: round2(daily_average),
        weekly_total: round2(weekly_total),
        monthly_total: round2(monthly_total),
        peak_consumption_day: peak.map(|p| PeakDay {
            date: p.date,
            value: round2(p.value),
        }),
        total_units_month: round2(monthly_total),
    }
}

/// Average daily consumption for the ISO week of `as_of` and for the
/// week before it. Feeds the insight generator.
pub fn weekly_averages(readings: &[ConsumptionReading], as_of: NaiveDate) -> WeeklyAverages {
    let this_week_start = week_start(as_of);
    let this_week_end = this_week_start + Duration::days(6);
    let last_week_start = this_week_start - Duration::days(7);
    let last_week_end = this_week_start - Duration::days(1);

    let average_for = |start: NaiveDate, end: NaiveDate| -> f64 {
        let in_week: Vec<&ConsumptionReading> = readings
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .collect();
        if in_week.is_empty() {
            0.0
        } else {
            in_week.iter().map(|r| r.consumption).sum::<f64>() / in_week.len() as f64
        }
    };

    WeeklyAverages {
        current_week_consumption: round2(average_for(this_week_start, this_week_end)),
        previous_week_consumption: round2(average_for(last_week_start, last_week_end)),
    }
}
