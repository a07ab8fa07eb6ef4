//! ALU bitwise logic and set-less-than comparisons.

use crate::core::pipeline::signals::AluOp;

/// Executes a logic or comparison operation.
///
/// SLT and SLTU produce 1 or 0. Returns `0` for any other opcode.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sltu => (a < b) as u32,
        _ => 0,
    }
}
