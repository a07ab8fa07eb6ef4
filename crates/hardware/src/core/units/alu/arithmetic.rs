//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^32. Both report signed overflow:
//! - ADD overflows when the operands share a sign that the result lacks.
//! - SUB overflows when the operand signs differ and the result's sign differs from `a`.

use super::{AluResult, SIGN_BIT};
use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// Returns a zero result for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> AluResult {
    match op {
        AluOp::Add => {
            let result = a.wrapping_add(b);
            AluResult::new(result, add_overflows(a, b, result))
        }
        AluOp::Sub => {
            let result = a.wrapping_sub(b);
            AluResult::new(result, sub_overflows(a, b, result))
        }
        _ => AluResult::new(0, false),
    }
}

/// Signed overflow of `a + b = result`.
pub const fn add_overflows(a: u32, b: u32, result: u32) -> bool {
    let same_sign = (a ^ b) & SIGN_BIT == 0;
    same_sign && (a ^ result) & SIGN_BIT != 0
}

/// Signed overflow of `a - b = result`.
pub const fn sub_overflows(a: u32, b: u32, result: u32) -> bool {
    let signs_differ = (a ^ b) & SIGN_BIT != 0;
    signs_differ && (a ^ result) & SIGN_BIT != 0
}
