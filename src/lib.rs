pub mod admission;
pub mod common;
pub mod config;
pub mod critical_section;
pub mod dispatcher;
pub mod errors;
pub mod hooks;
pub mod job;
pub mod miss_monitor;
pub mod ready_set;
pub mod registry;
pub mod release_engine;
pub mod scheduler;
pub mod traits;
pub mod utils;

#[cfg(test)]
mod scenarios;

pub mod prelude {
    pub use crate::common::prelude::*;
    pub use crate::config::SchedulerConfig;
    pub use crate::errors::AdmissionError;
    pub use crate::hooks::{NoHooks, SwitchHooks};
    pub use crate::job::{Job, TaskHandle};
    pub use crate::ready_set::{ReadyEntry, ReadyKey, ReadySet};
    pub use crate::registry::Registry;
    pub use crate::traits::{ContextSwitch, DelayedList, TickCounter, TickSource};
}
