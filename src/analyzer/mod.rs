mod compare;
mod split;
mod types;

pub use types::{Comparison, InputError};

use crate::model::{AllocationInput, AllocationResult};

/// Analyseur de faisabilité : valide l'entrée à la construction, calcule ensuite sans échec.
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityAnalyzer {
    input: AllocationInput,
    total_worker_days: i64,
}

impl FeasibilityAnalyzer {
    pub fn new(input: AllocationInput) -> Result<Self, InputError> {
        input.validate()?;
        let total_worker_days = input.total_worker_days()?;
        Ok(Self {
            input,
            total_worker_days,
        })
    }

    pub fn input(&self) -> &AllocationInput {
        &self.input
    }

    pub fn analyze(&self) -> AllocationResult {
        let result = split::even_split(self.input, self.total_worker_days);
        #[cfg(feature = "logging")]
        tracing::debug!(
            workers = self.input.worker_count,
            days = self.input.day_count,
            max_rest = self.input.max_rest_days,
            base = result.base_work_days,
            extra = result.extra_work_days,
            min_rest = result.theoretical_min_rest_days,
            feasible = result.is_feasible,
            "allocation analyzed"
        );
        result
    }
}

/// Raccourci : valide puis analyse.
pub fn analyze(input: AllocationInput) -> Result<AllocationResult, InputError> {
    Ok(FeasibilityAnalyzer::new(input)?.analyze())
}

impl AllocationResult {
    pub fn compare(&self, observed_rest_days: i64) -> Result<Comparison, InputError> {
        compare::compare(self, observed_rest_days)
    }
}
