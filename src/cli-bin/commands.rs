use std::collections::BTreeMap;

use edf_rt_core::common::taskset_serde::parse_taskset;
use edf_rt_core::common::Tick;
use edf_rt_core::config::SchedulerConfig;
use edf_rt_core::hooks::SwitchHooks;
use edf_rt_core::job::TaskHandle;
use edf_rt_core::scheduler::SchedulerContext;
use edf_rt_core::traits::{ContextSwitch, DelayedList, TickCounter};

use crate::args::{SimulateArgs, TaskParamsArgs, TasksetArgs};

fn load_config(config_file: Option<&str>) -> Result<SchedulerConfig, Box<dyn std::error::Error>> {
    match config_file {
        None => Ok(SchedulerConfig::default()),
        Some(path) => {
            let data = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        }
    }
}

fn load_registry(taskset: &TasksetArgs, config: &SchedulerConfig) -> Result<SchedulerContext, Box<dyn std::error::Error>> {
    let existing = parse_taskset(&taskset.taskset_file, taskset.taskset_file_ty)?;

    let mut ctx = SchedulerContext::new(*config);
    for params in existing {
        ctx.create_edf_task(params)?;
    }

    Ok(ctx)
}

/// `test-admission`: loads the task set at `taskset.taskset_file` as the
/// existing registry, then checks whether `candidate` may join it, without
/// mutating anything beyond this process's own scratch context (§6
/// `test_admission`).
pub fn test_admission(
    taskset: &TasksetArgs,
    candidate: &TaskParamsArgs,
    config_file: Option<&str>,
    quiet: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let config = load_config(config_file)?;
    let ctx = load_registry(taskset, &config)?;

    let params = edf_rt_core::common::TaskParams::new(candidate.wcet, candidate.deadline, candidate.period);
    let accepted = ctx.would_admit(&params);

    if !quiet {
        if accepted {
            println!("accepted: candidate joins a registry of {} task(s)", ctx.registry.len());
        } else {
            println!("rejected: candidate does not join a registry of {} task(s)", ctx.registry.len());
        }
    }

    Ok(accepted)
}

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

/// Stands in for the demo's GPIO/serial trace hook: logs each switch-in
/// and switch-out at `trace` level instead of toggling a pin, since the
/// host CLI has no logic-analyzer to drive.
#[derive(Default)]
struct TracingHooks {
    switches: u32,
}

impl SwitchHooks for TracingHooks {
    fn on_switch_in(&mut self, handle: TaskHandle) {
        self.switches += 1;
        log::trace!("switch in: task {handle:?}");
    }

    fn on_switch_out(&mut self, handle: TaskHandle) {
        log::trace!("switch out: task {handle:?}");
    }
}

/// `simulate`: admits every task in the file in order, then drives
/// `ticks` ticks of the release engine and deadline-miss monitor, using
/// an in-memory delayed list keyed by wake tick. Reports context-switch
/// requests and total deadline misses; returns whether the run was
/// miss-free.
pub fn simulate(args: &SimulateArgs, quiet: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let config = load_config(args.config_file.as_deref())?;
    let taskset = parse_taskset(&args.taskset.taskset_file, args.taskset.taskset_file_ty)?;

    let mut ctx = SchedulerContext::new(config);
    let mut delayed = MapDelayedList::default();

    for params in taskset {
        let handle = ctx.create_edf_task(params)?;
        let next_release = ctx.jobs[handle.index()].next_release;
        delayed.schedule_wake(handle, next_release);
    }

    let mut switch = CountingSwitch::default();
    let mut hooks = TracingHooks::default();
    let mut clock = TickCounter::new();

    for _ in 1..=args.ticks {
        let tick = clock.advance();
        let woken = ctx.on_tick(&mut delayed, &mut switch, tick);

        for handle in woken {
            let next_release = ctx.jobs[handle.index()].next_release;
            delayed.schedule_wake(handle, next_release);
        }

        ctx.dispatch_next(edf_rt_core::dispatcher::EDF_BAND, &mut hooks);
    }

    let misses: u32 = ctx.jobs.iter().map(|job| job.miss_count).sum();

    if !quiet {
        println!(
            "simulated {} ticks over {} task(s): {} context-switch requests, {} dispatches, {} deadline misses",
            args.ticks, ctx.registry.len(), switch.requests, hooks.switches, misses,
        );
    }

    Ok(misses == 0)
}
