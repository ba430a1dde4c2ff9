use crate::model::{AllocationInput, AllocationResult};

/// Répartition pigeonhole : chacun travaille `floor(W/N)` ou `ceil(W/N)` jours.
///
/// L'entrée doit avoir été validée (produit non débordant).
pub(super) fn even_split(input: AllocationInput, total_worker_days: i64) -> AllocationResult {
    let n = input.worker_count;
    let d = input.day_count;

    let budget_exceeds_capacity = input.max_rest_days > total_worker_days;
    let min_required_work_days = (total_worker_days - input.max_rest_days).max(0);

    let base_work_days = min_required_work_days / n;
    let extra_work_days = min_required_work_days % n;

    let workers_at_base_plus_one = extra_work_days;
    let workers_at_base = n - extra_work_days;

    // extra > 0 implique base < d, donc le repos du groupe base + 1 reste >= 0
    let theoretical_min_rest_days = workers_at_base * (d - base_work_days)
        + workers_at_base_plus_one * (d - base_work_days - 1);

    AllocationResult {
        input,
        total_worker_days,
        min_required_work_days,
        base_work_days,
        extra_work_days,
        workers_at_base,
        workers_at_base_plus_one,
        theoretical_min_rest_days,
        is_feasible: theoretical_min_rest_days <= input.max_rest_days,
        budget_exceeds_capacity,
    }
}
