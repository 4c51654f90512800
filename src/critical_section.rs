//! Critical-section seam (§5, §9).
//!
//! All state updates to the ready set, registry, running-task pointer,
//! and per-job deadline fields happen with interrupts masked, or inside
//! the tick handler itself. This crate models that as a single primitive:
//! a caller-supplied closure run with exclusive access to the
//! [`SchedulerContext`]. An embedded target supplies an interrupt-masking
//! implementation; the host test harness and CLI use the
//! `Mutex`-backed one below. No lock hierarchy exists because only one
//! critical-section domain protects everything the core touches.

use std::sync::Mutex;

use crate::scheduler::SchedulerContext;

pub trait CriticalSection {
    fn with<R>(&self, f: impl FnOnce(&mut SchedulerContext) -> R) -> R;
}

/// Host-side implementation backed by a standard mutex. Sufficient on
/// uniprocessor, where the spec rules out multiprocessor dispatch.
pub struct MutexCriticalSection {
    context: Mutex<SchedulerContext>,
}

impl MutexCriticalSection {
    pub fn new(context: SchedulerContext) -> Self {
        Self { context: Mutex::new(context) }
    }
}

impl CriticalSection for MutexCriticalSection {
    fn with<R>(&self, f: impl FnOnce(&mut SchedulerContext) -> R) -> R {
        let mut guard = self.context.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}
