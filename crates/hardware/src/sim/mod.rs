//! Simulation utilities and program loading.
//!
//! Provides the hex program loader and the `Simulator` run loop that drives a
//! `Cpu` and reports every cycle to its observers.

/// Hex program parsing.
pub mod loader;

/// Per-cycle observer hooks.
pub mod observer;

/// Run loop.
pub mod simulator;

pub use observer::Observer;
pub use simulator::Simulator;
