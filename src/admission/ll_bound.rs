//! ## Liu & Layland Utilization Bound
//!
//! #### Model:
//! - Periodic task model, fully-preemptive EDF.
//!
//! #### Preconditions:
//! - Implicit deadlines (`D == T`) for every task in the set.
//!
//! #### Complexity:
//! - O(n), integer-only.
//!
//! ---
//! #### References:
//! 1. C. L. Liu and J. W. Layland, "Scheduling Algorithms for
//!    Multiprogramming in a Hard-Real-Time Environment," J. ACM, vol. 20,
//!    no. 1, pp. 46-61, Jan. 1973, doi: 10.1145/321738.321743.

use crate::prelude::*;

pub const TEST_NAME: &str = "Liu & Layland utilization bound";

/// `Σ_i floor(Ci · S / Ti) ≤ S`, with `S` the fixed-point scale from
/// [`SchedulerConfig::ll_scale`].
///
/// Every term rounds down, which is conservative *per term* but can over-
/// admit by up to `n` least-significant units of `S` in total (§4.C.2);
/// this implementation always rounds down and never rounds up, documented
/// here as the consistent policy the spec asks for.
pub fn check(taskset: impl Iterator<Item = TaskParams>, config: &SchedulerConfig) -> Result<(), AdmissionError> {
    let scale = config.ll_scale;

    let total: u64 = taskset
        .map(|task| (task.wcet as u64) * scale / (task.period as u64))
        .sum();

    if total <= scale {
        Ok(())
    } else {
        Err(AdmissionError::not_schedulable_reason(
            TEST_NAME,
            format!("utilization {}/{scale} exceeds {scale}/{scale}", total),
        ))
    }
}
