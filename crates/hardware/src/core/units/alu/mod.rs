//! Arithmetic Logic Unit (ALU).
//!
//! Pure combinational function of two 32-bit operands and a 4-bit operation
//! code, used by the Execute stage. Alongside the result it reports the
//! `zero`, `negative` and `overflow` status flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (the only operations that report overflow)
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer addition and subtraction with signed-overflow detection.
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use serde::Serialize;

use crate::core::pipeline::signals::AluOp;

/// Bit 31: the sign bit of a 32-bit value.
const SIGN_BIT: u32 = 0x8000_0000;

/// ALU output: the result word plus status flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AluResult {
    /// 32-bit result.
    pub result: u32,
    /// Result equals zero.
    pub zero: bool,
    /// Bit 31 of the result.
    pub negative: bool,
    /// Signed overflow; only ever set by ADD and SUB.
    pub overflow: bool,
}

impl AluResult {
    /// Wraps a result word, deriving `zero` and `negative` from it.
    pub const fn new(result: u32, overflow: bool) -> Self {
        Self {
            result,
            zero: result == 0,
            negative: result & SIGN_BIT != 0,
            overflow,
        }
    }
}

/// Arithmetic Logic Unit (ALU) for RV32I integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also the shift amount, masked to 5 bits)
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::units::alu::Alu;
    /// use rvpipe_core::core::pipeline::signals::AluOp;
    ///
    /// let out = Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1);
    /// assert_eq!(out.result, 0x8000_0000);
    /// assert!(out.overflow && out.negative);
    ///
    /// let out = Alu::execute(AluOp::Sra, 0x8000_0000, 31);
    /// assert_eq!(out.result, 0xFFFF_FFFF);
    ///
    /// let out = Alu::execute(AluOp::Slt, -5_i32 as u32, 10);
    /// assert_eq!(out.result, 1);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> AluResult {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                AluResult::new(logic::execute(op, a, b), false)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => {
                AluResult::new(shifts::execute(op, a, b), false)
            }
        }
    }

    /// Executes an operation given as a raw 4-bit code.
    ///
    /// Unassigned codes produce a zero result with no overflow.
    pub fn execute_raw(code: u8, a: u32, b: u32) -> AluResult {
        AluOp::from_bits(code).map_or_else(|| AluResult::new(0, false), |op| Self::execute(op, a, b))
    }
}
