//! ## Processor Demand Analysis
//!
//! #### Model:
//! - Periodic task model, fully-preemptive EDF, constrained or implicit
//!   deadlines (`D ≤ T`).
//!
//! #### Preconditions:
//! - None beyond invariant 1 (`1 ≤ C ≤ D ≤ T`); this test subsumes the
//!   Liu & Layland bound and is run whenever the set is not known to have
//!   implicit deadlines throughout.
//!
//! #### Complexity:
//! - O(n · H / T_min) testing points in the worst case, where `H` is the
//!   horizon computed below; each point costs O(n) to evaluate.
//!
//! ---
//! #### References:
//! 1. J. Y.-T. Leung and J. Whitehead, "On the complexity of fixed-priority
//!    scheduling of periodic, real-time tasks," Performance Evaluation,
//!    vol. 2, no. 4, pp. 237-250, 1982.
//! 2. S. K. Baruah, A. K. Mok, and L. E. Rosier, "Preemptively scheduling
//!    hard-real-time sporadic tasks on one processor," in Proc. RTSS, 1990,
//!    pp. 182-190.

use crate::prelude::*;

pub const TEST_NAME: &str = "processor demand analysis";

/// Demand bound function `h(L) = Σ_i max(0, ⌊(L - Di) / Ti⌋ + 1) · Ci`,
/// summed over every task whose deadline has occurred by `L`.
fn demand_bound(taskset: &[TaskParams], level: u64) -> u64 {
    taskset.iter()
        .map(|task| {
            let deadline = task.deadline as u64;
            let period = task.period as u64;

            if level < deadline {
                0
            } else {
                ((level - deadline) / period + 1) * task.wcet as u64
            }
        })
        .sum()
}

/// Testing points `{Di + j·Ti : j ≥ 0}` for every task, capped at
/// `horizon` and deduplicated, ascending (§4.C.3).
fn testing_points(taskset: &[TaskParams], horizon: u64) -> Vec<u64> {
    let mut points: Vec<u64> = taskset.iter()
        .flat_map(|task| {
            let deadline = task.deadline as u64;
            let period = task.period as u64;
            std::iter::successors(Some(deadline), move |level| Some(level + period))
                .take_while(move |&level| level <= horizon)
        })
        .collect();

    points.sort_unstable();
    points.dedup();
    points
}

/// `H = min(k · max(Ti), horizon_cap)` (§4.C.3, open question resolved in
/// favor of the documented flat cap -- see `DESIGN.md`).
fn horizon(taskset: &[TaskParams], config: &SchedulerConfig) -> u64 {
    let max_period = taskset.iter().map(|task| task.period as u64).max().unwrap_or(0);
    let scaled = (config.pda_horizon_multiplier as u64).saturating_mul(max_period);
    scaled.min(config.pda_horizon_cap as u64)
}

/// Accepts a taskset iff `h(L) ≤ L` for every testing point `L` up to the
/// horizon. Rejects on the first violation found, ascending in `L`, so the
/// reported window is always the earliest overrun (§4.C.3, §7).
pub fn check<'a>(taskset: impl Iterator<Item = &'a TaskParams>, config: &SchedulerConfig) -> Result<(), AdmissionError> {
    let taskset: Vec<TaskParams> = taskset.copied().collect();

    if taskset.is_empty() {
        return Ok(());
    }

    let horizon = horizon(&taskset, config);

    for level in testing_points(&taskset, horizon) {
        let demand = demand_bound(&taskset, level);

        if demand > level {
            return Err(AdmissionError::not_schedulable_reason(
                TEST_NAME,
                format!("processor demand {demand} exceeds window {level} (horizon {horizon})"),
            ));
        }
    }

    Ok(())
}
