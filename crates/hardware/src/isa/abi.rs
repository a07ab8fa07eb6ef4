//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Used by the disassembler and by register dumps in the front end.

/// Number of architectural integer registers.
pub const REG_COUNT: usize = 32;

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;

/// ABI register names for x0–x31.
const REG_NAMES: [&str; REG_COUNT] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index, or `"x??"` if out of range.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}
