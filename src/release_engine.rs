//! Release engine (§4.D): runs every tick, moving delayed jobs whose wake
//! time arrived into the ready set.
//!
//! Deadlines are refreshed at the wake point, not at the prior
//! sleep-until-next-period call: a job that finished before the tick
//! handler noticed would otherwise re-enter ready carrying a stale, past
//! deadline and monopolize the CPU under it.

use log::debug;

use crate::common::Tick;
use crate::dispatcher;
use crate::job::{Job, TaskHandle};
use crate::ready_set::ReadySet;
use crate::registry::Registry;
use crate::traits::{ContextSwitch, DelayedList};

/// Drains every job due to wake at `tick`, advances EDF jobs to their next
/// period, inserts them into the ready set, and runs the preemption check
/// against each one in turn.
///
/// Simultaneous wakes are processed in registry order (§4.D "Boundary
/// behavior"), regardless of the order `delayed` happens to yield them in.
pub fn release_due<Dl, Cx>(
    delayed: &mut Dl,
    registry: &Registry,
    jobs: &mut [Job],
    ready: &mut ReadySet,
    running: Option<&Job>,
    switch: &mut Cx,
    tick: Tick,
) -> Vec<TaskHandle>
where
    Dl: DelayedList,
    Cx: ContextSwitch,
{
    let mut due = delayed.drain_due(tick);
    due.sort_by_key(TaskHandle::index);

    let mut woken = Vec::with_capacity(due.len());

    for handle in due {
        let Some(params) = registry.get(handle) else { continue };
        let job = &mut jobs[handle.index()];

        if job.is_edf {
            job.release_next(params);
            ready.insert(handle, job.abs_deadline);
        } else {
            ready.push_back_legacy(handle);
        }

        debug!("released task {handle:?} at tick {tick}, abs_deadline {}", job.abs_deadline);

        if dispatcher::should_preempt(running, &*job) {
            debug!("preempting: task {handle:?} (abs_deadline {}) takes the CPU", job.abs_deadline);
            switch.request_switch();
        }

        woken.push(handle);
    }

    woken
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::TaskParams;

    #[derive(Default)]
    struct FakeDelayed {
        due: Vec<TaskHandle>,
    }

    impl DelayedList for FakeDelayed {
        fn schedule_wake(&mut self, handle: TaskHandle, _wake_tick: Tick) {
            self.due.push(handle);
        }

        fn drain_due(&mut self, _tick: Tick) -> Vec<TaskHandle> {
            std::mem::take(&mut self.due)
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

    #[test]
    fn waking_edf_job_is_inserted_sorted_and_requests_a_switch() {
        let mut registry = Registry::new(4);
        let handle = registry.add(TaskParams::new(50, 100, 100)).unwrap();

        let mut jobs = vec![Job::first_release(handle, &TaskParams::new(50, 100, 100), Tick::zero(), true)];
        jobs[0].next_release = Tick(100);

        let mut ready = ReadySet::new();
        let mut delayed = FakeDelayed::default();
        delayed.schedule_wake(handle, Tick(100));
        let mut switch = CountingSwitch::default();

        let woken = release_due(&mut delayed, &registry, &mut jobs, &mut ready, None, &mut switch, Tick(100));

        assert_eq!(woken, vec![handle]);
        assert_eq!(ready.peek_min().unwrap().handle, handle);
        assert_eq!(jobs[0].release_time, Tick(100));
        assert_eq!(jobs[0].abs_deadline, Tick(200));
        assert_eq!(switch.requests, 1);
    }

    #[test]
    fn simultaneous_wakes_process_in_registry_order() {
        let mut registry = Registry::new(4);
        let first = registry.add(TaskParams::new(10, 100, 100)).unwrap();
        let second = registry.add(TaskParams::new(10, 50, 100)).unwrap();

        let mut jobs = vec![
            Job::first_release(first, &TaskParams::new(10, 100, 100), Tick::zero(), true),
            Job::first_release(second, &TaskParams::new(10, 50, 100), Tick::zero(), true),
        ];

        let mut ready = ReadySet::new();
        let mut delayed = FakeDelayed::default();
        delayed.schedule_wake(second, Tick(100));
        delayed.schedule_wake(first, Tick(100));
        let mut switch = CountingSwitch::default();

        let woken = release_due(&mut delayed, &registry, &mut jobs, &mut ready, None, &mut switch, Tick(100));

        assert_eq!(woken, vec![first, second]);
    }
}
