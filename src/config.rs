/// Scheduler-wide tunables that are not part of any single task's
/// parameters.
///
/// `SchedulerConfig::default()` reproduces the compile-time constants the
/// spec pins (`S = 10000`, `k = 4`, registry capacity 128); a config file
/// may override them for the offline CLI harness (see
/// [`crate::common::taskset_serde`] for the task-set file convention this
/// mirrors).
#[derive(Clone, Copy)]
#[derive(Debug)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct SchedulerConfig {
    /// Maximum number of admitted tasks the registry can hold.
    pub registry_capacity: usize,
    /// Fixed-point scale `S` used by the Liu & Layland bound.
    pub ll_scale: u64,
    /// PDA horizon multiplier `k` in `H = min(k · max(T), horizon_cap)`.
    pub pda_horizon_multiplier: u32,
    /// Hard cap on the PDA horizon, in ticks (`60 · tick_rate` by default).
    pub pda_horizon_cap: u32,
    /// Ticks per second of the target's periodic timer interrupt.
    pub tick_rate: u32,
}

impl SchedulerConfig {
    pub const DEFAULT_REGISTRY_CAPACITY: usize = 128;
    pub const DEFAULT_LL_SCALE: u64 = 10_000;
    pub const DEFAULT_PDA_HORIZON_MULTIPLIER: u32 = 4;
    pub const DEFAULT_TICK_RATE: u32 = 1000;

    /// Hard cap used by [`Self::default`]: `60 · tick_rate` ticks.
    pub fn default_horizon_cap() -> u32 {
        60 * Self::DEFAULT_TICK_RATE
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            registry_capacity: Self::DEFAULT_REGISTRY_CAPACITY,
            ll_scale: Self::DEFAULT_LL_SCALE,
            pda_horizon_multiplier: Self::DEFAULT_PDA_HORIZON_MULTIPLIER,
            pda_horizon_cap: Self::default_horizon_cap(),
            tick_rate: Self::DEFAULT_TICK_RATE,
        }
    }
}
