//! RV32I function codes (funct3, instruction bits 14:12).
//!
//! The same 3-bit value means different things under different opcodes, so
//! the constants are grouped by the opcode they qualify.

// Arithmetic (OP / OP-IMM). The low three bits of the ALU op code mirror these.

/// ADD, ADDI, SUB.
pub const ADD_SUB: u32 = 0b000;
/// SLL, SLLI.
pub const SLL: u32 = 0b001;
/// SLT, SLTI.
pub const SLT: u32 = 0b010;
/// SLTU, SLTIU.
pub const SLTU: u32 = 0b011;
/// XOR, XORI.
pub const XOR: u32 = 0b100;
/// SRL, SRLI, SRA, SRAI.
pub const SRL_SRA: u32 = 0b101;
/// OR, ORI.
pub const OR: u32 = 0b110;
/// AND, ANDI.
pub const AND: u32 = 0b111;

// Branches.

/// Branch if equal.
pub const BEQ: u32 = 0b000;
/// Branch if not equal.
pub const BNE: u32 = 0b001;
/// Branch if less than (signed).
pub const BLT: u32 = 0b100;
/// Branch if greater or equal (signed).
pub const BGE: u32 = 0b101;
/// Branch if less than (unsigned).
pub const BLTU: u32 = 0b110;
/// Branch if greater or equal (unsigned).
pub const BGEU: u32 = 0b111;

// Loads and stores.

/// Load/store byte.
pub const LB: u32 = 0b000;
/// Load/store halfword.
pub const LH: u32 = 0b001;
/// Load/store word.
pub const LW: u32 = 0b010;
/// Load byte, zero-extended.
pub const LBU: u32 = 0b100;
/// Load halfword, zero-extended.
pub const LHU: u32 = 0b101;

/// Store byte.
pub const SB: u32 = 0b000;
/// Store halfword.
pub const SH: u32 = 0b001;
/// Store word.
pub const SW: u32 = 0b010;
