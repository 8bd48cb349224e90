use crate::models::{ConsumptionReading, Reading};

/// Annotate each reading with the usage since its chronological
/// predecessor. The working copy is sorted ascending by date; the
/// caller's slice is left untouched. A decrease between consecutive
/// readings (meter swap, correction) clamps to 0 rather than going
/// negative. Deltas are always taken against the literal predecessor,
/// regardless of how many calendar days lie between the two readings.
pub fn derive_consumption(readings: &[Reading]) -> Vec<ConsumptionReading> {
    if readings.len() < 2 {
        return readings
            .iter()
            .map(|r| annotate(r, 0.0))
            .collect();
    }

    let mut sorted: Vec<&Reading> = readings.iter().collect();
    sorted.sort_by_key(|r| r.date);

    sorted
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if i == 0 {
                annotate(r, 0.0)
            } else {
                let delta = r.value - sorted[i - 1].value;
                annotate(r, delta.max(0.0))
            }
        })
        .collect()
}

fn annotate(reading: &Reading, consumption: f64) -> ConsumptionReading {
    ConsumptionReading {
        id: reading.id,
        date: reading.date,
        value: reading.value,
        consumption,
    }
}
