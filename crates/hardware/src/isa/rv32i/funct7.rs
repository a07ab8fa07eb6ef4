//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions and in the
//! immediate shifts to select the alternate operation.

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b000_0000;

/// Alternate operation (SUB, SRA, SRAI).
pub const ALT: u32 = 0b010_0000;

/// The single funct7 bit (instruction bit 30) that selects the alternate operation.
pub const ALT_BIT: u32 = 0b010_0000;
