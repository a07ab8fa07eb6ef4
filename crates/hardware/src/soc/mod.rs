//! Memory system attached to the core.
//!
//! The core sees two independent memories, Harvard style: a read-only
//! instruction memory populated before simulation, and a byte-addressable
//! data memory accessed by the MEM stage.

/// Instruction and data memory implementations.
pub mod memory;

pub use memory::{DataMemory, InstructionMemory};
