//! Combinational functional units.
//!
//! This module contains the two pure functions the pipeline is built around:
//! the integer ALU used by Execute and the control unit used by Decode.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Instruction decoder producing the control bundle and immediate.
pub mod control;
