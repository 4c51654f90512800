//! Trace hooks (§6): `on_switch_in` / `on_switch_out`.
//!
//! Optional; absence is a no-op. A hook must never call back into the
//! core -- it exists purely for the surrounding demo to toggle a GPIO pin
//! or print a trace line.

use crate::job::TaskHandle;

pub trait SwitchHooks {
    fn on_switch_in(&mut self, _handle: TaskHandle) {}
    fn on_switch_out(&mut self, _handle: TaskHandle) {}
}

/// Default hook set installed when the embedding kernel supplies none.
pub struct NoHooks;

impl SwitchHooks for NoHooks {}
