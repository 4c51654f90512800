//! Deadline-miss monitor (§4.F).
//!
//! Policy is log-and-continue: a miss is recorded once per job instance
//! and the job keeps running toward completion. Abort, shift, and
//! log+kill policies are extension points this module deliberately does
//! not implement.

use log::warn;

use crate::common::Tick;
use crate::job::{Job, TaskHandle};
use crate::ready_set::ReadySet;

/// Scans the ready set and the currently running job (if any) for
/// overruns, charging each job instance at most once.
///
/// `current_tick > abs_deadline` is strict: a job that completes exactly
/// on its deadline tick is not a miss (§9, open question resolution).
pub fn scan(ready: &ReadySet, jobs: &mut [Job], running: Option<TaskHandle>, tick: Tick) {
    for entry in ready.iter() {
        charge_if_missed(jobs, entry.handle, tick);
    }

    if let Some(handle) = running {
        charge_if_missed(jobs, handle, tick);
    }
}

fn charge_if_missed(jobs: &mut [Job], handle: TaskHandle, tick: Tick) {
    let job = &mut jobs[handle.index()];

    if tick > job.abs_deadline && job.record_miss_once() {
        warn!(
            "deadline miss: task {handle:?} at tick {tick}, abs_deadline {} (miss_count {})",
            job.abs_deadline, job.miss_count,
        );
    }
}
