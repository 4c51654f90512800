pub mod prelude {
    pub use super::taskset_serde::prelude::*;
    pub use super::{
        Tick,
        TaskParams,
        TaskSetUtils,
    };
}

pub mod taskset_serde;

/// A point in time, measured in scheduler ticks.
///
/// Ticks are produced by the periodic timer interrupt; the core is
/// integer-only and never touches wall-clock time or floating point.
#[derive(Clone, Copy)]
#[derive(Debug)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u32);

/// Immutable task parameters, admitted into the registry as `(C, D, T)`.
///
/// `wcet ≤ deadline ≤ period` is checked at admission time (invariant 1);
/// nothing past admission may mutate these fields (invariant 5).
#[derive(Clone, Copy)]
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TaskParams {
    pub wcet: u32,
    pub deadline: u32,
    pub period: u32,
}

pub struct TaskSetUtils;

// =============================================================================

impl Tick {
    pub fn zero() -> Self {
        Self(0)
    }
}

/// Wraps on overflow rather than panicking (debug builds) or silently
/// wrapping only in release builds: the rollover policy is that ticks
/// wrap at `u32::MAX` and ordering past a wrap is undefined (open
/// question in DESIGN.md), but the wrap itself must behave identically
/// in every build profile on a target that runs for months between
/// resets.
impl std::ops::Add<u32> for Tick {
    type Output = Tick;

    fn add(self, rhs: u32) -> Self::Output {
        Tick(self.0.wrapping_add(rhs))
    }
}

impl std::ops::Sub for Tick {
    type Output = u32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0.wrapping_sub(rhs.0)
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TaskParams {
    pub fn new(wcet: u32, deadline: u32, period: u32) -> Self {
        Self { wcet, deadline, period }
    }

    pub fn has_implicit_deadline(&self) -> bool {
        self.deadline == self.period
    }

    pub fn has_constrained_deadline(&self) -> bool {
        self.deadline <= self.period
    }

    /// Invariant 1: `1 ≤ C ≤ D ≤ T`.
    pub fn is_well_formed(&self) -> bool {
        self.wcet >= 1 && self.wcet <= self.deadline && self.deadline <= self.period
    }
}

impl TaskSetUtils {
    pub fn implicit_deadlines<'a>(taskset: impl IntoIterator<Item = &'a TaskParams>) -> bool {
        taskset.into_iter().all(TaskParams::has_implicit_deadline)
    }

    pub fn constrained_deadlines<'a>(taskset: impl IntoIterator<Item = &'a TaskParams>) -> bool {
        taskset.into_iter().all(TaskParams::has_constrained_deadline)
    }

    pub fn largest_period<'a>(taskset: impl IntoIterator<Item = &'a TaskParams>) -> u32 {
        taskset.into_iter().map(|task| task.period).max().unwrap_or(0)
    }
}
