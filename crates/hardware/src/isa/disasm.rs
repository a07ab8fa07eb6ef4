//! Instruction Disassembler for RV32I.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rvpipe_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A0_0513), "addi a0, zero, 10");
//! assert_eq!(disassemble(0x0000_0013), "nop");
//! ```

use crate::common::constants::NOP_INSTRUCTION;
use crate::isa::abi::reg_name as xreg;
use crate::isa::decode::decode;
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Disassembles a 32-bit RV32I instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown (0x...)"` for
/// encodings outside RV32I.
pub fn disassemble(inst: u32) -> String {
    if inst == NOP_INSTRUCTION {
        return "nop".to_string();
    }

    let d = decode(inst);
    let (rd, rs1, rs2, imm) = (xreg(d.rd), xreg(d.rs1), xreg(d.rs2), d.imm);
    let alt = d.funct7 & f7::ALT_BIT != 0;

    match d.opcode {
        // ── R-type register-register ──────────────────────
        op::OP_REG => {
            let mn = match (d.funct3, alt) {
                (f3::ADD_SUB, false) => "add",
                (f3::ADD_SUB, true) => "sub",
                (f3::SLL, _) => "sll",
                (f3::SLT, _) => "slt",
                (f3::SLTU, _) => "sltu",
                (f3::XOR, _) => "xor",
                (f3::SRL_SRA, false) => "srl",
                (f3::SRL_SRA, true) => "sra",
                (f3::OR, _) => "or",
                _ => "and",
            };
            format!("{mn} {rd}, {rs1}, {rs2}")
        }

        // ── I-type immediate arithmetic ───────────────────
        op::OP_IMM => match d.funct3 {
            f3::SLL => format!("slli {rd}, {rs1}, {}", d.rs2),
            f3::SRL_SRA => {
                let mn = if alt { "srai" } else { "srli" };
                format!("{mn} {rd}, {rs1}, {}", d.rs2)
            }
            other => {
                let mn = match other {
                    f3::ADD_SUB => "addi",
                    f3::SLT => "slti",
                    f3::SLTU => "sltiu",
                    f3::XOR => "xori",
                    f3::OR => "ori",
                    _ => "andi",
                };
                format!("{mn} {rd}, {rs1}, {imm}")
            }
        },

        // ── Loads ─────────────────────────────────────────
        op::OP_LOAD => {
            let mn = match d.funct3 {
                f3::LB => "lb",
                f3::LH => "lh",
                f3::LW => "lw",
                f3::LBU => "lbu",
                f3::LHU => "lhu",
                _ => "l??",
            };
            format!("{mn} {rd}, {imm}({rs1})")
        }

        // ── Stores ────────────────────────────────────────
        op::OP_STORE => {
            let mn = match d.funct3 {
                f3::SB => "sb",
                f3::SH => "sh",
                f3::SW => "sw",
                _ => "s??",
            };
            format!("{mn} {rs2}, {imm}({rs1})")
        }

        // ── Branches ──────────────────────────────────────
        op::OP_BRANCH => {
            let mn = match d.funct3 {
                f3::BEQ => "beq",
                f3::BNE => "bne",
                f3::BLT => "blt",
                f3::BGE => "bge",
                f3::BLTU => "bltu",
                f3::BGEU => "bgeu",
                _ => "b??",
            };
            format!("{mn} {rs1}, {rs2}, {imm}")
        }

        // ── U-type ────────────────────────────────────────
        op::OP_LUI => format!("lui {rd}, {:#x}", (imm as u32) >> 12),
        op::OP_AUIPC => format!("auipc {rd}, {:#x}", (imm as u32) >> 12),

        // ── Jumps ─────────────────────────────────────────
        op::OP_JAL => format!("jal {rd}, {imm}"),
        op::OP_JALR => format!("jalr {rd}, {imm}({rs1})"),

        op::OP_MISC_MEM => "fence".to_string(),
        _ => format!("unknown ({inst:#010x})"),
    }
}
