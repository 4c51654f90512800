//! End-to-end scenarios exercising the dispatch/release/admission/monitor
//! components together through the public API.

use std::collections::BTreeMap;

use crate::admission::{ll_bound, pda};
use crate::common::{TaskParams, Tick};
use crate::config::SchedulerConfig;
use crate::dispatcher::EDF_BAND;
use crate::errors::AdmissionError;
use crate::hooks::NoHooks;
use crate::job::TaskHandle;
use crate::scheduler::SchedulerContext;
use crate::traits::{ContextSwitch, DelayedList, TickCounter};

#[derive(Default)]
struct MapDelayedList {
    wakes: BTreeMap<u32, Vec<TaskHandle>>,
}

impl DelayedList for MapDelayedList {
    fn schedule_wake(&mut self, handle: TaskHandle, wake_tick: Tick) {
        self.wakes.entry(wake_tick.0).or_default().push(handle);
    }

    fn drain_due(&mut self, tick: Tick) -> Vec<TaskHandle> {
        self.wakes.remove(&tick.0).unwrap_or_default()
    }
}

#[derive(Default)]
struct CountingSwitch {
    requests: u32,
}

impl ContextSwitch for CountingSwitch {
    fn request_switch(&mut self) {
        self.requests += 1;
    }
}

/// Admits every task in `taskset`, runs `ticks` ticks dispatching the
/// ready set's head instantly each tick, and returns the final context
/// alongside the total context-switch requests observed.
fn run(taskset: &[TaskParams], ticks: u32) -> (SchedulerContext, u32) {
    let mut ctx = SchedulerContext::new(SchedulerConfig::default());
    let mut delayed = MapDelayedList::default();

    for params in taskset {
        let handle = ctx.create_edf_task(*params).expect("scenario taskset is schedulable");
        let next_release = ctx.jobs[handle.index()].next_release;
        delayed.schedule_wake(handle, next_release);
    }

    let mut switch = CountingSwitch::default();
    let mut clock = TickCounter::new();

    for _ in 1..=ticks {
        let tick = clock.advance();
        let woken = ctx.on_tick(&mut delayed, &mut switch, tick);

        for handle in woken {
            let next_release = ctx.jobs[handle.index()].next_release;
            delayed.schedule_wake(handle, next_release);
        }

        ctx.dispatch_next(EDF_BAND, &mut NoHooks);
    }

    (ctx, switch.requests)
}

/// S1: low-utilization set, no misses over a 2000-tick window.
#[test]
fn s1_low_utilization_set_completes_with_no_misses() {
    let taskset = [
        TaskParams::new(100, 250, 500),
        TaskParams::new(150, 500, 1000),
        TaskParams::new(200, 1000, 2000),
    ];

    let (ctx, _switches) = run(&taskset, 2000);

    for job in &ctx.jobs {
        assert_eq!(job.miss_count, 0);
    }
}

/// S2: once the short-period task is admitted and ready, the dispatcher
/// prefers it over the already-ready, longer-period task -- the
/// dispatch-decision form of "preempted by the shortest-period task".
#[test]
fn s2_short_period_task_is_preferred_over_already_ready_long_task() {
    let mut ctx = SchedulerContext::new(SchedulerConfig::default());

    let long = ctx.create_edf_task(TaskParams::new(400, 1000, 1600)).unwrap();
    assert_eq!(ctx.select(EDF_BAND), Some(long));

    let short = ctx.create_edf_task(TaskParams::new(80, 200, 400)).unwrap();
    ctx.create_edf_task(TaskParams::new(150, 400, 800)).unwrap();

    assert_eq!(ctx.select(EDF_BAND), Some(short));
}

/// S3: a registry built from S2, rejecting an overloaded candidate
/// without mutating the registry or the ready set.
#[test]
fn s3_overloaded_candidate_is_rejected_without_mutation() {
    let mut ctx = SchedulerContext::new(SchedulerConfig::default());
    ctx.create_edf_task(TaskParams::new(80, 200, 400)).unwrap();
    ctx.create_edf_task(TaskParams::new(150, 400, 800)).unwrap();
    ctx.create_edf_task(TaskParams::new(400, 1000, 1600)).unwrap();

    let before_len = ctx.registry.len();
    let before_ready_len = ctx.ready.len();

    let err = ctx.create_edf_task(TaskParams::new(150, 200, 200)).unwrap_err();

    assert!(err.is_not_schedulable());
    assert_eq!(ctx.registry.len(), before_len);
    assert_eq!(ctx.ready.len(), before_ready_len);
}

/// S4: the selector uses the LL bound while every admitted task and the
/// candidate have implicit deadlines, and switches to PDA the moment any
/// one of them does not.
#[test]
fn s4_selector_switches_from_ll_bound_to_pda() {
    let mut registry = crate::registry::Registry::new(8);
    registry.add(TaskParams::new(100, 500, 500)).unwrap();

    let implicit_candidate = TaskParams::new(200, 1000, 1000);
    assert_eq!(crate::admission::selected_test(&registry, &implicit_candidate), ll_bound::TEST_NAME);

    let constrained_candidate = TaskParams::new(200, 800, 1000);
    assert_eq!(crate::admission::selected_test(&registry, &constrained_candidate), pda::TEST_NAME);
}

/// S5: growing a set of 100 identical-period tasks with linearly
/// staggered deadlines, the LL bound rejects strictly before PDA does.
#[test]
fn s5_pda_accepts_strictly_more_of_the_growing_set_than_ll_bound() {
    let config = SchedulerConfig::default();
    let period = 250u32;
    let wcet = 5u32;

    let taskset: Vec<TaskParams> = (0..100u32)
        .map(|index| {
            let deadline = (30 + 5 * index).clamp(wcet, period);
            TaskParams::new(wcet, deadline, period)
        })
        .collect();

    let ll_accepted = (1..=taskset.len())
        .take_while(|&count| ll_bound::check(taskset[..count].iter().copied(), &config).is_ok())
        .count();

    let pda_accepted = (1..=taskset.len())
        .take_while(|&count| pda::check(taskset[..count].iter(), &config).is_ok())
        .count();

    assert!(pda_accepted > ll_accepted, "pda={pda_accepted} ll={ll_accepted}");
}

/// S6: a job that is never dispatched away keeps accumulating ticks past
/// its deadline, but the monitor still charges exactly one miss per job
/// instance, resetting at the next release.
#[test]
fn s6_deadline_miss_is_charged_once_per_job_instance() {
    let mut ctx = SchedulerContext::new(SchedulerConfig::default());
    let offender = ctx.create_edf_task(TaskParams::new(50, 100, 200)).unwrap();
    ctx.create_edf_task(TaskParams::new(10, 50, 100)).unwrap();
    ctx.create_edf_task(TaskParams::new(10, 80, 160)).unwrap();

    let mut delayed = MapDelayedList::default();
    for handle in [offender] {
        let next_release = ctx.jobs[handle.index()].next_release;
        delayed.schedule_wake(handle, next_release);
    }
    let mut switch = CountingSwitch::default();
    let mut clock = TickCounter::new();

    for _ in 1..=120u32 {
        ctx.on_tick(&mut delayed, &mut switch, clock.advance());
    }

    assert_eq!(ctx.jobs[offender.index()].miss_count, 1);

    for _ in 121..=130u32 {
        ctx.on_tick(&mut delayed, &mut switch, clock.advance());
    }

    assert_eq!(ctx.jobs[offender.index()].miss_count, 1, "must not double-count the same job instance");
}

#[test]
fn reject_with_invalid_parameters_leaves_scheduler_untouched() {
    let mut ctx = SchedulerContext::new(SchedulerConfig::default());
    let err = ctx.create_edf_task(TaskParams::new(10, 5, 5)).unwrap_err();

    assert!(matches!(err, AdmissionError::InvalidParameters(_)));
    assert_eq!(ctx.registry.len(), 0);
}
