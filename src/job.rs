use crate::prelude::*;

/// Handle into the [`crate::registry::Registry`], returned on successful
/// admission. Opaque stand-in for the task-control-block pointer the real
/// kernel would hand back from `xTaskCreateEDF`.
#[derive(Clone, Copy)]
#[derive(Debug)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(pub(crate) u32);

impl TaskHandle {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Mutable per-job state (§3 "Per-job state").
///
/// Exactly one `Job` is live per admitted EDF task at a time; it is
/// recycled in place across releases rather than reallocated.
#[derive(Clone, Copy)]
#[derive(Debug)]
pub struct Job {
    pub handle: TaskHandle,
    pub release_time: Tick,
    pub abs_deadline: Tick,
    pub next_release: Tick,
    pub miss_count: u32,
    pub is_edf: bool,
    /// Set once this job instance has been charged a miss, so the monitor
    /// never double-counts the same overrun across ticks (§4.F).
    pub(crate) missed_current: bool,
}

impl Job {
    /// First release of a newly admitted task: `release_time` is the
    /// current tick, so `abs_deadline = current_tick + D` (§6).
    pub fn first_release(handle: TaskHandle, params: &TaskParams, current_tick: Tick, is_edf: bool) -> Self {
        Self {
            handle,
            release_time: current_tick,
            abs_deadline: current_tick + params.deadline,
            next_release: current_tick + params.period,
            miss_count: 0,
            is_edf,
            missed_current: false,
        }
    }

    /// Advances the job to its next period (§4.D, step 2). Must be called
    /// at the wake tick, never at the prior sleep point (see rationale in
    /// the release engine's module documentation).
    pub fn release_next(&mut self, params: &TaskParams) {
        self.release_time = self.next_release;
        self.abs_deadline = self.release_time + params.deadline;
        self.next_release = self.release_time + params.period;
        self.missed_current = false;
    }

    /// Records a deadline miss exactly once per job instance, returning
    /// whether this call is the one that recorded it.
    pub fn record_miss_once(&mut self) -> bool {
        if self.missed_current {
            false
        } else {
            self.missed_current = true;
            self.miss_count += 1;
            true
        }
    }
}
