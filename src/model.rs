#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::analyzer::InputError;

/// Paramètres du problème : effectif, période et budget total de repos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationInput {
    pub worker_count: i64,
    pub day_count: i64,
    pub max_rest_days: i64,
}

impl AllocationInput {
    pub const DEFAULT_WORKERS: i64 = 336;
    pub const DEFAULT_DAYS: i64 = 22;
    pub const DEFAULT_MAX_REST: i64 = 410;

    /// Construit une entrée validée.
    pub fn new(
        worker_count: i64,
        day_count: i64,
        max_rest_days: i64,
    ) -> Result<Self, InputError> {
        let input = Self {
            worker_count,
            day_count,
            max_rest_days,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.worker_count <= 0 {
            return Err(InputError::NonPositiveWorkers(self.worker_count));
        }
        if self.day_count < 0 {
            return Err(InputError::NegativeDays(self.day_count));
        }
        if self.max_rest_days < 0 {
            return Err(InputError::NegativeRestBudget(self.max_rest_days));
        }
        self.total_worker_days()?;
        Ok(())
    }

    /// `worker_count × day_count`, en arithmétique vérifiée.
    pub fn total_worker_days(&self) -> Result<i64, InputError> {
        self.worker_count
            .checked_mul(self.day_count)
            .ok_or(InputError::Overflow)
    }
}

impl Default for AllocationInput {
    fn default() -> Self {
        Self {
            worker_count: Self::DEFAULT_WORKERS,
            day_count: Self::DEFAULT_DAYS,
            max_rest_days: Self::DEFAULT_MAX_REST,
        }
    }
}

/// Groupe de travailleurs partageant le même nombre de jours travaillés.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerGroup {
    pub workers: i64,
    pub work_days: i64,
    pub rest_days: i64,
}

/// Objectif individuel d'un travailleur (indice 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerTarget {
    pub worker: i64,
    pub work_days: i64,
    pub rest_days: i64,
}

/// Résultat de l'analyse, recalculé à chaque appel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationResult {
    pub input: AllocationInput,
    pub total_worker_days: i64,
    pub min_required_work_days: i64,
    pub base_work_days: i64,
    pub extra_work_days: i64,
    pub workers_at_base: i64,
    pub workers_at_base_plus_one: i64,
    pub theoretical_min_rest_days: i64,
    pub is_feasible: bool,
    /// Le budget de repos dépasse le nombre total de jours-travailleur.
    #[cfg_attr(feature = "serde", serde(default))]
    pub budget_exceeds_capacity: bool,
}

impl AllocationResult {
    pub fn average_work_days(&self) -> f64 {
        self.min_required_work_days as f64 / self.input.worker_count as f64
    }

    pub fn rest_days_at_base(&self) -> i64 {
        self.input.day_count - self.base_work_days
    }

    pub fn rest_days_at_base_plus_one(&self) -> i64 {
        self.input.day_count - self.base_work_days - 1
    }

    /// Groupes non vides, base d'abord.
    pub fn groups(&self) -> Vec<WorkerGroup> {
        [
            WorkerGroup {
                workers: self.workers_at_base,
                work_days: self.base_work_days,
                rest_days: self.rest_days_at_base(),
            },
            WorkerGroup {
                workers: self.workers_at_base_plus_one,
                work_days: self.base_work_days + 1,
                rest_days: self.rest_days_at_base_plus_one(),
            },
        ]
        .into_iter()
        .filter(|g| g.workers > 0)
        .collect()
    }

    /// Code de sortie CLI : 0 faisable, 2 infaisable.
    pub fn exit_code(&self) -> i32 {
        if self.is_feasible {
            0
        } else {
            2
        }
    }

    /// Marge restante sous le plafond (négative si infaisable).
    pub fn slack(&self) -> i64 {
        self.input.max_rest_days - self.theoretical_min_rest_days
    }

    /// Objectifs par travailleur : les `workers_at_base` premiers à la base,
    /// les suivants à base + 1.
    pub fn targets(&self) -> impl Iterator<Item = WorkerTarget> + '_ {
        (0..self.input.worker_count).map(move |worker| {
            let work_days = if worker < self.workers_at_base {
                self.base_work_days
            } else {
                self.base_work_days + 1
            };
            WorkerTarget {
                worker,
                work_days,
                rest_days: self.input.day_count - work_days,
            }
        })
    }
}
