//! ALU shift operations.
//!
//! Shift amounts are masked to 5 bits (0–31). SRA fills with copies of the
//! sign bit of `a`.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
pub const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (low 5 bits used, upper bits ignored).
///
/// Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}
