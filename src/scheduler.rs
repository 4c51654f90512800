//! Scheduler context (§9 "Global mutable state").
//!
//! The registry and ready set are process-wide, but this crate pins them
//! as fields of a single aggregate passed explicitly rather than ambient
//! `static` globals: Rust's ownership rules make an explicit handle both
//! safer and no harder to thread through a tick handler and creation
//! entry points than true globals would be.

use log::{info, warn};

use crate::admission;
use crate::common::{TaskParams, Tick};
use crate::config::SchedulerConfig;
use crate::dispatcher;
use crate::errors::AdmissionError;
use crate::hooks::SwitchHooks;
use crate::job::{Job, TaskHandle};
use crate::ready_set::ReadySet;
use crate::registry::Registry;
use crate::release_engine;
use crate::miss_monitor;
use crate::traits::{ContextSwitch, DelayedList};

pub struct SchedulerContext {
    pub registry: Registry,
    pub jobs: Vec<Job>,
    pub ready: ReadySet,
    pub running: Option<TaskHandle>,
    pub config: SchedulerConfig,
    pub current_tick: Tick,
}

impl SchedulerContext {
    pub fn new(config: SchedulerConfig) -> Self {
        let jobs = Vec::with_capacity(config.registry_capacity);
        Self {
            registry: Registry::new(config.registry_capacity),
            jobs,
            ready: ReadySet::new(),
            running: None,
            current_tick: Tick::zero(),
            config,
        }
    }

    /// Creation entry point (§6 `create_edf_task`). Admission runs before
    /// any state is touched; on rejection the registry, jobs, and ready
    /// set are left bit-identical to their pre-call state (testable
    /// property 5).
    pub fn create_edf_task(&mut self, params: TaskParams) -> Result<TaskHandle, AdmissionError> {
        if let Err(err) = admission::admit(&self.registry, &params, &self.config) {
            warn!(
                "rejected task: C={} D={} T={}: {err}",
                params.wcet, params.deadline, params.period,
            );
            return Err(err);
        }

        let handle = match self.registry.add(params) {
            Ok(handle) => handle,
            Err(err) => {
                warn!("rejected task: C={} D={} T={}: {err}", params.wcet, params.deadline, params.period);
                return Err(err);
            }
        };
        let job = Job::first_release(handle, &params, self.current_tick, true);
        self.jobs.push(job);
        self.ready.insert(handle, job.abs_deadline);

        info!(
            "admitted task {handle:?}: C={} D={} T={}",
            params.wcet, params.deadline, params.period,
        );

        Ok(handle)
    }

    /// Tick entry point (§2 data flow): runs the release engine, then the
    /// deadline-miss monitor, in that order. Returns the handles released
    /// this tick, so a caller driving the delayed-list collaborator knows
    /// which tasks to re-arm for their next period.
    pub fn on_tick<Dl, Cx>(&mut self, delayed: &mut Dl, switch: &mut Cx, tick: Tick) -> Vec<TaskHandle>
    where
        Dl: DelayedList,
        Cx: ContextSwitch,
    {
        self.current_tick = tick;

        let running_job = self.running.map(|handle| self.jobs[handle.index()]);
        let woken = release_engine::release_due(
            delayed,
            &self.registry,
            &mut self.jobs,
            &mut self.ready,
            running_job.as_ref(),
            switch,
            tick,
        );

        miss_monitor::scan(&self.ready, &mut self.jobs, self.running, tick);

        woken
    }

    /// Selection on context switch (§4.E.1). Does not remove the selected
    /// job from the ready set; see [`Self::dispatch_next`].
    pub fn select(&self, band: u8) -> Option<TaskHandle> {
        dispatcher::select(&self.ready, band)
    }

    /// Pops the head of the ready set at `band` and records it as the
    /// running task, driving the trace hooks (§6) around the switch: the
    /// outgoing task (if any) gets `on_switch_out`, the incoming task (if
    /// any) gets `on_switch_in`, in that order.
    ///
    /// The core only decides *which* job should run (`select`); actually
    /// performing the switch, and removing the outgoing job from ready,
    /// belongs to the peripheral kernel's context-switch mechanism. This
    /// is a thin stand-in for that mechanism, used by the CLI and example
    /// harnesses to drive a coarse schedule trace without a real
    /// execution unit: it keeps invariant 2 (at most one ready-set entry
    /// per task) from being violated by a harness that never dispatches
    /// anything.
    pub fn dispatch_next(&mut self, band: u8, hooks: &mut dyn SwitchHooks) -> Option<TaskHandle> {
        if band != dispatcher::EDF_BAND {
            return None;
        }

        let outgoing = self.running;
        let handle = self.ready.pop_min().map(|entry| entry.handle);

        if let Some(outgoing) = outgoing {
            hooks.on_switch_out(outgoing);
        }
        if let Some(incoming) = handle {
            hooks.on_switch_in(incoming);
        }

        self.running = handle;
        handle
    }

    /// Pure feasibility probe (§6 `test_admission`), without mutating
    /// anything.
    pub fn would_admit(&self, candidate: &TaskParams) -> bool {
        admission::would_admit(&self.registry, candidate, &self.config)
    }
}

/// Sleep entry point (§6 `delay_until_next_period`): pure over ticks plus
/// the delayed-list collaborator. The actual suspension mechanism belongs
/// to the peripheral kernel; this just advances the bookkeeping and
/// re-arms the wake.
pub fn delay_until_next_period<Dl: DelayedList>(
    delayed: &mut Dl,
    handle: TaskHandle,
    last_wake_time: &mut Tick,
    period: u32,
) {
    *last_wake_time = *last_wake_time + period;
    delayed.schedule_wake(handle, *last_wake_time);
}
