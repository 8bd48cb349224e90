use crate::error::{AppError, Result};
use crate::models::Reading;
use chrono::NaiveDate;
use uuid::Uuid;

/// Gate every write before it reaches the repository. Checks, in order:
/// the value is a non-negative finite number, no other reading occupies
/// the candidate date, and the cumulative value does not regress below
/// the latest reading dated before the candidate. A value of exactly 0
/// is the reserved "meter reset" sentinel and bypasses the
/// monotonicity check. `exclude_id` lets updates ignore their own row.
///
/// Pure function: persistence stays with the caller.
pub fn validate_write(
    date: NaiveDate,
    value: f64,
    existing: &[Reading],
    exclude_id: Option<Uuid>,
) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(
            "Reading value must be a non-negative number".to_string(),
        ));
    }

    let others = existing
        .iter()
        .filter(|r| exclude_id != Some(r.id));

    if others.clone().any(|r| r.date == date) {
        return Err(AppError::Validation(format!(
            "A reading for {} already exists",
            date
        )));
    }

    let previous_value = others
        .filter(|r| r.date < date)
        .max_by_key(|r| r.date)
        .map(|r| r.value)
        .unwrap_or(0.0);

    if value < previous_value && value != 0.0 {
        return Err(AppError::Validation(format!(
            "Reading value {} is lower than the previous reading {}; \
             enter 0 to record a meter reset",
            value, previous_value
        )));
    }

    Ok(())
}
