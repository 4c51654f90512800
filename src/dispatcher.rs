//! Dispatcher (§4.E): selection on context switch, and the preemption
//! decision triggered by a newly ready job.

use crate::job::Job;
use crate::job::TaskHandle;
use crate::ready_set::ReadySet;

/// The single EDF priority band. Level 0 is reserved for the idle task;
/// every other band falls back to the stock round-robin policy, which
/// this crate does not reimplement.
pub const EDF_BAND: u8 = 1;

/// Selection on context switch (§4.E.1). Returns `None` for any band
/// other than [`EDF_BAND`], deferring to the legacy scheduler.
///
/// With `edf-scheduler` disabled this always defers (§6 "Configuration
/// flag": "selection reverts to round-robin at each priority band"),
/// since the ready set no longer keeps its head sorted by deadline.
pub fn select(ready: &ReadySet, band: u8) -> Option<TaskHandle> {
    #[cfg(feature = "edf-scheduler")]
    if band == EDF_BAND {
        return ready.peek_min().map(|entry| entry.handle);
    }

    #[cfg(not(feature = "edf-scheduler"))]
    let _ = (ready, band);

    None
}

/// Preemption decision (§4.E.2): does `waking` take the CPU away from
/// `running`?
///
/// Both-non-EDF legacy priority comparison is not modeled here -- that
/// path belongs to the stock round-robin policy already running
/// alongside this core, and this function is only consulted for
/// transitions that touch the EDF band.
pub fn should_preempt(running: Option<&Job>, waking: &Job) -> bool {
    match running {
        None => true,
        Some(running) => match (running.is_edf, waking.is_edf) {
            (false, true) => true,
            (true, true) => waking.abs_deadline < running.abs_deadline,
            (true, false) => false,
            (false, false) => false,
        },
    }
}
