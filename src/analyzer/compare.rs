use super::{Comparison, InputError};
use crate::model::AllocationResult;

pub(super) fn compare(
    result: &AllocationResult,
    observed_rest_days: i64,
) -> Result<Comparison, InputError> {
    if observed_rest_days < 0 {
        return Err(InputError::NegativeObserved(observed_rest_days));
    }
    let theoretical = result.theoretical_min_rest_days;
    let efficiency =
        (observed_rest_days > 0).then(|| theoretical as f64 / observed_rest_days as f64);
    Ok(Comparison {
        observed_rest_days,
        theoretical_min_rest_days: theoretical,
        wasted_rest_days: observed_rest_days - theoretical,
        efficiency,
    })
}
