use crate::analyzer::Comparison;
use crate::model::AllocationResult;
use std::fmt::Write;

/// Permet de customiser le rendu du rapport (texte console, markdown, etc.).
pub trait ReportRenderer {
    fn render(&self, result: &AllocationResult, comparison: Option<&Comparison>) -> String;
}

/// Rapport texte multi-sections destiné à la console.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, result: &AllocationResult, comparison: Option<&Comparison>) -> String {
        let mut out = String::new();
        write_report(&mut out, result, comparison).expect("writing to a String cannot fail");
        out
    }
}

fn write_report(
    out: &mut String,
    result: &AllocationResult,
    comparison: Option<&Comparison>,
) -> std::fmt::Result {
    let input = &result.input;
    writeln!(out, "=== Constraint analysis ===")?;
    writeln!(out, "Workers: {}", input.worker_count)?;
    writeln!(out, "Days: {}", input.day_count)?;
    writeln!(out, "Total worker-days: {}", result.total_worker_days)?;
    writeln!(out, "Max rest days: {}", input.max_rest_days)?;
    writeln!(out, "Required work days: {}", result.min_required_work_days)?;
    if result.budget_exceeds_capacity {
        writeln!(
            out,
            "Note: rest budget exceeds total worker-days, no work is required"
        )?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Average work days per worker: {:.2}",
        result.average_work_days()
    )?;
    writeln!(out, "Optimal split:")?;
    for line in split_lines(result) {
        writeln!(out, "  {line}")?;
    }
    writeln!(
        out,
        "Theoretical minimum total rest days: {}",
        result.theoretical_min_rest_days
    )?;
    writeln!(out)?;

    writeln!(out, "=== Feasibility ===")?;
    writeln!(out, "{}", verdict_line(result))?;
    if !result.is_feasible {
        writeln!(
            out,
            "   limit must be raised to at least {} days",
            result.theoretical_min_rest_days
        )?;
    }

    if let Some(cmp) = comparison {
        writeln!(out)?;
        writeln!(out, "=== Key findings ===")?;
        for (i, line) in findings(result, cmp).iter().enumerate() {
            writeln!(out, "{}. {line}", i + 1)?;
        }

        writeln!(out)?;
        writeln!(out, "=== Comparison ===")?;
        writeln!(out, "Observed rest days: {}", cmp.observed_rest_days)?;
        match cmp.efficiency {
            Some(e) => writeln!(out, "Efficiency: {:.1}%", e * 100.0)?,
            None => writeln!(out, "Efficiency: n/a")?,
        }
        writeln!(out, "Wasted rest days: {}", cmp.wasted_rest_days)?;

        writeln!(out)?;
        writeln!(out, "=== Recommendations ===")?;
        writeln!(
            out,
            "1. Root cause: the observed allocation does not target work-day counts"
        )?;
        writeln!(
            out,
            "2. Fix: assign each worker an exact work-day target before placing days"
        )?;
        writeln!(out, "3. Targets: {}", target_range(result))?;
        writeln!(
            out,
            "4. Approach: integer linear programming or constraint satisfaction"
        )?;
    }
    Ok(())
}

/// Une ligne par groupe non vide, ex. `74 worker(s) work 20 day(s), rest 2 day(s)`.
pub fn split_lines(result: &AllocationResult) -> Vec<String> {
    result
        .groups()
        .iter()
        .map(|g| {
            format!(
                "{} worker(s) work {} day(s), rest {} day(s)",
                g.workers, g.work_days, g.rest_days
            )
        })
        .collect()
}

pub fn verdict_line(result: &AllocationResult) -> String {
    let limit = result.input.max_rest_days;
    let min = result.theoretical_min_rest_days;
    if result.is_feasible {
        format!("✅ feasible: theoretical minimum {min} ≤ limit {limit}")
    } else {
        format!("❌ infeasible: theoretical minimum {min} > limit {limit}")
    }
}

/// Constats calculés à partir du verdict et du total observé.
pub fn findings(result: &AllocationResult, cmp: &Comparison) -> Vec<String> {
    let limit = result.input.max_rest_days;
    let min = cmp.theoretical_min_rest_days;
    let mut lines = Vec::new();
    if result.is_feasible {
        lines.push(format!(
            "The {limit}-day limit is feasible, the gap lies in the allocation algorithm"
        ));
    } else {
        lines.push(format!(
            "The {limit}-day limit is infeasible, it must be raised to at least {min} days"
        ));
    }
    match cmp.wasted_rest_days {
        w if w > 0 => {
            lines.push(format!(
                "Observed {} rest days is {w} above the theoretical minimum {min}",
                cmp.observed_rest_days
            ));
            lines.push(
                "The observed allocation is inefficient and needs a redesign".to_string(),
            );
        }
        0 => lines.push(format!(
            "Observed {} rest days matches the theoretical minimum",
            cmp.observed_rest_days
        )),
        w => lines.push(format!(
            "Observed {} rest days is {} below the theoretical minimum {min}, work is not covered",
            cmp.observed_rest_days, -w
        )),
    }
    lines
}

fn target_range(result: &AllocationResult) -> String {
    match result.groups().as_slice() {
        [lo, hi] => format!(
            "each worker works {}-{} days and rests {}-{} days",
            lo.work_days, hi.work_days, hi.rest_days, lo.rest_days
        ),
        [only] => format!(
            "each worker works {} days and rests {} days",
            only.work_days, only.rest_days
        ),
        _ => "no worker".to_string(),
    }
}
