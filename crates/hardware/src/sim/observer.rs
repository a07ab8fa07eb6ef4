//! Observer hooks.
//!
//! Observers see a read-only [`CycleSnapshot`] after every clock edge. They
//! cannot reach back into the core.

use crate::core::cpu::CycleSnapshot;

/// Receives one snapshot per simulated cycle.
pub trait Observer {
    /// Called after the clock edge described by `snapshot` has been applied.
    fn on_cycle(&mut self, snapshot: &CycleSnapshot);

    /// Called once when a run finishes.
    fn on_finish(&mut self, _cycles: u64) {}
}
