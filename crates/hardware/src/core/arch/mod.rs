//! Architectural state elements.
//!
//! 1. **GPRs:** The 32-entry integer register file with its write-after-read port ordering.
//! 2. **PC:** The program counter state machine driving instruction fetch.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Program counter and its next-address logic.
pub mod pc;
