//! Cycle-accurate model of a classic 5-stage pipelined RV32I core.
//!
//! This crate implements the core at the level of its pipeline datapath. It provides:
//! 1. **Core:** Fetch, decode, execute, memory and writeback stages joined by four
//!    pipeline registers, with load-use stalls, control flushes and operand forwarding.
//! 2. **Units:** ALU, control decoder, hazard detection and forwarding selection.
//! 3. **ISA:** RV32I field extraction, immediates, ABI names and a disassembler.
//! 4. **Memories:** NOP-filled instruction memory and byte-addressed data memory.
//! 5. **Simulation:** Hex program loader, run loop with observers, and statistics.

/// Common constants and the host-side error type.
pub mod common;
/// Simulator configuration (defaults, address unit, hierarchical config structures).
pub mod config;
/// CPU core (architectural state, pipeline, execution units).
pub mod core;
/// Instruction set (encodings, decode, ABI names, disassembly).
pub mod isa;
/// Program loading and the observed run loop.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the register file, memories and pipeline registers.
pub use crate::core::Cpu;
/// Run loop owning a `Cpu` and its observers.
pub use crate::sim::Simulator;
