//! Common utilities and types used throughout the pipeline model.
//!
//! 1. **Constants:** Instruction sizes, the canonical NOP, and memory defaults.
//! 2. **Error Handling:** The host-side `SimError` type for loading and configuration.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for the host-facing parts of the simulator.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NOP_INSTRUCTION};
pub use error::{Result, SimError};
