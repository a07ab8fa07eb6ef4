//! RISC-V Instruction Decoder.
//!
//! Splits a 32-bit RV32I word into a `Decoded` record. The immediate is
//! reassembled from its format-specific bit permutation and extended:
//!
//! 1. **I-type:** `imm[11:0]` in bits 31:20, sign-extended from 12 bits.
//! 2. **S-type:** `imm[11:5]` in 31:25 and `imm[4:0]` in 11:7, sign-extended from 12 bits.
//! 3. **B-type:** `imm[12|10:5]` in 31:25 and `imm[4:1|11]` in 11:7, sign-extended from 13 bits, bit 0 zero.
//! 4. **U-type:** bits 31:12 kept in place, low 12 bits zero.
//! 5. **J-type:** `imm[20|10:1|11|19:12]` in 31:12, sign-extended from 21 bits, bit 0 zero.
//!
//! Decoding is a pure function of the word. Unknown opcodes decode with a zero
//! immediate and `Format::Unknown`.

use crate::isa::instruction::{Decoded, Format, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// I-Type immediate occupies bits 31:20.
const I_IMM_SHIFT: u32 = 20;

const S_IMM_LOW_SHIFT: u32 = 7;
const S_IMM_LOW_MASK: u32 = 0x1F;
const S_IMM_HIGH_SHIFT: u32 = 25;
const S_IMM_HIGH_MASK: u32 = 0x7F;
const S_IMM_BITS: u32 = 12;

const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;
const B_IMM_BITS: u32 = 13;

/// U-Type keeps bits 31:12 in place.
const U_IMM_MASK: u32 = 0xFFFF_F000;

const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;
const J_IMM_BITS: u32 = 21;

/// Classifies an opcode into its encoding format.
pub const fn format_of(opcode: u32) -> Format {
    match opcode {
        opcodes::OP_REG => Format::R,
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => Format::I,
        opcodes::OP_STORE => Format::S,
        opcodes::OP_BRANCH => Format::B,
        opcodes::OP_LUI | opcodes::OP_AUIPC => Format::U,
        opcodes::OP_JAL => Format::J,
        _ => Format::Unknown,
    }
}

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let format = format_of(opcode);

    Decoded {
        raw: inst,
        opcode,
        format,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: immediate(inst, format),
    }
}

/// Source register indices the instruction actually reads.
///
/// Bits that sit in the `rs1`/`rs2` positions but belong to an immediate or a
/// shift amount are reported as `x0`, which never carries a dependence. R, S
/// and B formats read both sources, I reads `rs1` only, and U, J and unknown
/// encodings read none.
pub fn source_registers(inst: u32) -> (usize, usize) {
    match format_of(inst.opcode()) {
        Format::R | Format::S | Format::B => (inst.rs1(), inst.rs2()),
        Format::I => (inst.rs1(), 0),
        Format::U | Format::J | Format::Unknown => (0, 0),
    }
}

/// Extracts the immediate for the given format. R-type and unknown formats carry none.
pub const fn immediate(inst: u32, format: Format) -> i32 {
    match format {
        Format::I => i_type_imm(inst),
        Format::S => s_type_imm(inst),
        Format::B => b_type_imm(inst),
        Format::U => u_type_imm(inst),
        Format::J => j_type_imm(inst),
        Format::R | Format::Unknown => 0,
    }
}

/// I-Type: `imm[11:0] | rs1 | funct3 | rd | opcode`.
pub const fn i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// S-Type: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
pub const fn s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << 5) | low, S_IMM_BITS)
}

/// B-Type: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
pub const fn b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & 1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// U-Type: `imm[31:12] | rd | opcode`.
pub const fn u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// J-Type: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
pub const fn j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & 1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` of `val` to a 32-bit signed integer.
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
