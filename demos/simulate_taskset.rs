//! Drives the S1 low-utilization scenario directly through the library
//! API, without going through the CLI's task-set file loading, as a
//! minimal usage example for embedders wiring the core into their own
//! tick handler.

use std::collections::BTreeMap;

use edf_rt_core::common::{TaskParams, Tick};
use edf_rt_core::config::SchedulerConfig;
use edf_rt_core::hooks::SwitchHooks;
use edf_rt_core::job::TaskHandle;
use edf_rt_core::scheduler::SchedulerContext;
use edf_rt_core::traits::{ContextSwitch, DelayedList, TickCounter};

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

struct LoggingSwitch;

impl ContextSwitch for LoggingSwitch {
    fn request_switch(&mut self) {
        log::debug!("context switch requested");
    }
}

/// Stand-in for the demo's logic-analyzer trace pin: a real target would
/// toggle a GPIO line here instead of printing.
struct GpioTraceHooks;

impl SwitchHooks for GpioTraceHooks {
    fn on_switch_in(&mut self, handle: TaskHandle) {
        println!("pin high: task {handle:?} switched in");
    }

    fn on_switch_out(&mut self, handle: TaskHandle) {
        println!("pin low: task {handle:?} switched out");
    }
}

fn main() {
    env_logger::init();

    let mut ctx = SchedulerContext::new(SchedulerConfig::default());
    let mut delayed = MapDelayedList::default();
    let mut switch = LoggingSwitch;
    let mut hooks = GpioTraceHooks;

    for params in [
        TaskParams::new(100, 250, 500),
        TaskParams::new(150, 500, 1000),
        TaskParams::new(200, 1000, 2000),
    ] {
        let handle = ctx.create_edf_task(params).expect("S1 set is schedulable");
        let next_release = ctx.jobs[handle.index()].next_release;
        delayed.schedule_wake(handle, next_release);
    }

    let mut clock = TickCounter::new();

    for _ in 1..=2000u32 {
        let tick = clock.advance();
        let woken = ctx.on_tick(&mut delayed, &mut switch, tick);

        for handle in woken {
            let next_release = ctx.jobs[handle.index()].next_release;
            delayed.schedule_wake(handle, next_release);
        }

        ctx.dispatch_next(edf_rt_core::dispatcher::EDF_BAND, &mut hooks);
    }

    for job in &ctx.jobs {
        println!("task {:?}: miss_count = {}", job.handle, job.miss_count);
    }
}
