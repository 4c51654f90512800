//! Admission controller (§4.C).
//!
//! Selects between the two feasibility tests rather than always running
//! the more expensive one: when every already-admitted task and the
//! candidate have an implicit deadline (`D == T`), the Liu & Layland bound
//! is necessary and sufficient and far cheaper than enumerating testing
//! points, so it is preferred. Any constrained deadline anywhere in the
//! combined set falls back to processor demand analysis, which is
//! sufficient for the general case.

pub mod ll_bound;
pub mod pda;

use crate::prelude::*;

/// Checks whether `candidate` may join the tasks already in `registry`,
/// without mutating anything. [`crate::scheduler::SchedulerContext::create_edf_task`]
/// calls this before [`Registry::add`]; nothing else is permitted to add
/// to the registry first (invariant 5).
pub fn admit(registry: &Registry, candidate: &TaskParams, config: &SchedulerConfig) -> Result<(), AdmissionError> {
    if !candidate.is_well_formed() {
        return Err(AdmissionError::invalid_parameters(format!(
            "expected 1 <= wcet <= deadline <= period, got wcet={}, deadline={}, period={}",
            candidate.wcet, candidate.deadline, candidate.period,
        )));
    }

    let combined = registry.iter().chain(std::iter::once(candidate));

    if TaskSetUtils::implicit_deadlines(combined.clone()) {
        ll_bound::check(combined.copied(), config)
    } else {
        pda::check(combined, config)
    }
}

/// Pure yes/no form of [`admit`], for callers that only want to probe
/// feasibility (the CLI's `test-admission` subcommand, and test scenarios
/// that assert acceptance or rejection without caring why).
pub fn would_admit(registry: &Registry, candidate: &TaskParams, config: &SchedulerConfig) -> bool {
    admit(registry, candidate, config).is_ok()
}

/// Reports which feasibility test [`admit`] would run for `registry` plus
/// `candidate`, without running it. Exists so the selector itself (§4.C.1)
/// is directly testable, independent of whether the two tests happen to
/// agree on accept/reject for a given set.
pub fn selected_test(registry: &Registry, candidate: &TaskParams) -> &'static str {
    let combined = registry.iter().chain(std::iter::once(candidate));

    if TaskSetUtils::implicit_deadlines(combined) {
        ll_bound::TEST_NAME
    } else {
        pda::TEST_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SchedulerConfig {
        SchedulerConfig::default()
    }

    #[test]
    fn implicit_deadline_set_uses_ll_bound_and_is_accepted() {
        let mut registry = Registry::new(8);
        registry.add(TaskParams::new(100, 500, 500)).unwrap();

        let candidate = TaskParams::new(150, 1000, 1000);
        assert!(admit(&registry, &candidate, &config()).is_ok());
    }

    #[test]
    fn constrained_deadline_set_falls_back_to_pda() {
        let mut registry = Registry::new(8);
        registry.add(TaskParams::new(100, 250, 500)).unwrap();

        let candidate = TaskParams::new(150, 500, 1000);
        assert!(admit(&registry, &candidate, &config()).is_ok());
    }

    #[test]
    fn selector_picks_ll_bound_when_every_deadline_is_implicit() {
        let mut registry = Registry::new(8);
        registry.add(TaskParams::new(100, 500, 500)).unwrap();

        let candidate = TaskParams::new(200, 1000, 1000);
        assert_eq!(selected_test(&registry, &candidate), ll_bound::TEST_NAME);
    }

    #[test]
    fn selector_picks_pda_when_any_deadline_is_constrained() {
        let mut registry = Registry::new(8);
        registry.add(TaskParams::new(100, 500, 500)).unwrap();

        let candidate = TaskParams::new(200, 800, 1000);
        assert_eq!(selected_test(&registry, &candidate), pda::TEST_NAME);
    }

    #[test]
    fn malformed_candidate_is_rejected_before_any_feasibility_test() {
        let registry = Registry::new(8);
        let candidate = TaskParams::new(10, 5, 5);

        let err = admit(&registry, &candidate, &config()).unwrap_err();
        assert!(matches!(err, AdmissionError::InvalidParameters(_)));
    }

    #[test]
    fn overloaded_candidate_is_rejected_by_feasibility_test() {
        let mut registry = Registry::new(8);
        registry.add(TaskParams::new(600, 1000, 1000)).unwrap();

        let candidate = TaskParams::new(600, 1000, 1000);
        assert!(admit(&registry, &candidate, &config()).unwrap_err().is_not_schedulable());
    }

    #[test]
    fn would_admit_does_not_mutate_registry() {
        let mut registry = Registry::new(8);
        registry.add(TaskParams::new(100, 500, 500)).unwrap();

        let candidate = TaskParams::new(150, 1000, 1000);
        assert!(would_admit(&registry, &candidate, &config()));
        assert_eq!(registry.len(), 1);
    }
}
