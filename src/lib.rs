#![forbid(unsafe_code)]
//! Restbudget — vérifie qu'un budget total de jours de repos est atteignable.
//!
//! - Répartition équitable (pigeonhole) des jours travaillés.
//! - Verdict de faisabilité et borne minimale de repos.
//! - Comparaison optionnelle avec un total observé.
//! - Export JSON/CSV (feature `serde`).

pub mod analyzer;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;

pub use analyzer::{analyze, Comparison, FeasibilityAnalyzer, InputError};
pub use model::{AllocationInput, AllocationResult, WorkerGroup, WorkerTarget};
pub use report::{ReportRenderer, TextReport};
