//! Control Unit.
//!
//! A stateless decode table from a 32-bit instruction word to the control
//! bundle and immediate consumed by the rest of the pipeline. The table is
//! keyed by opcode and, for register-register and shift encodings, by
//! funct3/funct7:
//! 1. **R-type:** register-register ALU ops; funct7 bit 30 selects SUB/SRA.
//! 2. **I-type:** immediate ALU ops, loads, and JALR.
//! 3. **S-type:** stores.
//! 4. **B-type:** conditional branches; funct3 selects the predicate.
//! 5. **U-type:** LUI (operand A is zero) and AUIPC (operand A is the PC).
//! 6. **J-type:** JAL.
//!
//! Encodings outside RV32I, reserved funct3/funct7 combinations, FENCE and
//! SYSTEM all decode to the NOP bundle so the model stays live.

use serde::Serialize;

use crate::core::pipeline::signals::{
    AluOp, BranchCond, ControlSignals, MemWidth, OpASrc, ResultSrc,
};
use crate::isa::decode::immediate;
use crate::isa::decode::format_of;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Output of the control unit for one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlWord {
    /// Control bundle that ages through the pipeline registers.
    pub signals: ControlSignals,
    /// Extended immediate for the instruction's format (0 for R-type).
    pub imm: i32,
}

/// Stateless instruction decoder.
#[derive(Debug)]
pub struct ControlUnit;

impl ControlUnit {
    /// Decodes an instruction word into its control bundle and immediate.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::units::control::ControlUnit;
    /// use rvpipe_core::core::pipeline::signals::{AluOp, ResultSrc};
    ///
    /// // sub x10, x11, x12
    /// let word = ControlUnit::decode(0x40C5_8533);
    /// assert!(word.signals.reg_write && !word.signals.alu_src);
    /// assert_eq!(word.signals.alu_op, AluOp::Sub);
    ///
    /// // jal ra, 8
    /// let word = ControlUnit::decode(0x0080_00EF);
    /// assert!(word.signals.jump);
    /// assert_eq!(word.signals.result_src, ResultSrc::PcPlus4);
    /// assert_eq!(word.imm, 8);
    /// ```
    pub fn decode(inst: u32) -> ControlWord {
        match Self::signals(inst) {
            Some(signals) => ControlWord {
                signals,
                imm: immediate(inst, format_of(inst.opcode())),
            },
            None => ControlWord::default(),
        }
    }

    /// Control bundle for a recognised encoding, `None` otherwise.
    fn signals(inst: u32) -> Option<ControlSignals> {
        let f3 = inst.funct3();
        let f7 = inst.funct7();
        let alt = f7 & funct7::ALT_BIT != 0;

        let base = ControlSignals::default();
        let ctrl = match inst.opcode() {
            opcodes::OP_REG => {
                let alt_allowed = f3 == funct3::ADD_SUB || f3 == funct3::SRL_SRA;
                if f7 != funct7::DEFAULT && !(f7 == funct7::ALT && alt_allowed) {
                    return None;
                }
                ControlSignals {
                    reg_write: true,
                    alu_op: AluOp::from_funct(f3, alt),
                    ..base
                }
            }
            opcodes::OP_IMM => {
                let alu_op = match f3 {
                    funct3::SLL if f7 != funct7::DEFAULT => return None,
                    funct3::SRL_SRA if f7 != funct7::DEFAULT && f7 != funct7::ALT => return None,
                    funct3::SRL_SRA => AluOp::from_funct(f3, alt),
                    _ => AluOp::from_funct(f3, false),
                };
                ControlSignals {
                    reg_write: true,
                    alu_src: true,
                    alu_op,
                    ..base
                }
            }
            opcodes::OP_LOAD => {
                if f3 == 0b011 || f3 >= 0b110 {
                    return None;
                }
                ControlSignals {
                    reg_write: true,
                    alu_src: true,
                    mem_read: true,
                    result_src: ResultSrc::Mem,
                    mem_size: MemWidth::from_funct3(f3),
                    signed_load: f3 & 0b100 == 0,
                    ..base
                }
            }
            opcodes::OP_STORE => {
                if f3 > funct3::SW {
                    return None;
                }
                ControlSignals {
                    alu_src: true,
                    mem_write: true,
                    mem_size: MemWidth::from_funct3(f3),
                    ..base
                }
            }
            opcodes::OP_BRANCH => ControlSignals {
                branch: true,
                branch_cond: BranchCond::from_funct3(f3)?,
                alu_op: AluOp::Sub,
                ..base
            },
            opcodes::OP_LUI => ControlSignals {
                reg_write: true,
                alu_src: true,
                a_src: OpASrc::Zero,
                ..base
            },
            opcodes::OP_AUIPC => ControlSignals {
                reg_write: true,
                alu_src: true,
                a_src: OpASrc::Pc,
                ..base
            },
            opcodes::OP_JAL => ControlSignals {
                reg_write: true,
                jump: true,
                result_src: ResultSrc::PcPlus4,
                ..base
            },
            opcodes::OP_JALR => {
                if f3 != 0 {
                    return None;
                }
                ControlSignals {
                    reg_write: true,
                    alu_src: true,
                    jump: true,
                    result_src: ResultSrc::PcPlus4,
                    ..base
                }
            }
            _ => return None,
        };
        Some(ctrl)
    }
}
