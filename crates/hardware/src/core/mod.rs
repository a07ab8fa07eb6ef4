//! Core processor implementation.
//!
//! This module contains the CPU model: architectural state, the pipeline
//! stages and registers that connect them, and the combinational units the
//! stages are built from.

/// Architectural state (register file, program counter).
pub mod arch;

/// CPU core implementation and clock edge evaluation.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, forwarding, signals).
pub mod pipeline;

/// Combinational units (ALU, control decoder).
pub mod units;

pub use self::cpu::Cpu;
