use thiserror::Error;

/// Comparaison avec un total de repos observé ailleurs (ex. un algorithme existant).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub observed_rest_days: i64,
    pub theoretical_min_rest_days: i64,
    /// `observed - theoretical` ; négatif si l'observé passe sous la borne.
    pub wasted_rest_days: i64,
    /// `theoretical / observed`, absent si l'observé vaut 0.
    pub efficiency: Option<f64>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid input: worker_count must be positive (got {0})")]
    NonPositiveWorkers(i64),
    #[error("invalid input: day_count must be non-negative (got {0})")]
    NegativeDays(i64),
    #[error("invalid input: max_rest_days must be non-negative (got {0})")]
    NegativeRestBudget(i64),
    #[error("invalid input: observed_rest_days must be non-negative (got {0})")]
    NegativeObserved(i64),
    #[error("invalid input: worker_count * day_count overflows")]
    Overflow,
}
