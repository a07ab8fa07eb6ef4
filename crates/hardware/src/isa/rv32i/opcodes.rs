//! RV32I major opcodes (instruction bits 6:0).

/// Load instructions (LB, LH, LW, LBU, LHU). I-type.
pub const OP_LOAD: u32 = 0b000_0011;

/// Memory ordering fence. Decoded as a no-op by this core.
pub const OP_MISC_MEM: u32 = 0b000_1111;

/// Register-immediate arithmetic (ADDI, SLTI, ANDI, SLLI, ...). I-type.
pub const OP_IMM: u32 = 0b001_0011;

/// Add upper immediate to PC. U-type.
pub const OP_AUIPC: u32 = 0b001_0111;

/// Store instructions (SB, SH, SW). S-type.
pub const OP_STORE: u32 = 0b010_0011;

/// Register-register arithmetic (ADD, SUB, SLL, ...). R-type.
pub const OP_REG: u32 = 0b011_0011;

/// Load upper immediate. U-type.
pub const OP_LUI: u32 = 0b011_0111;

/// Conditional branches (BEQ, BNE, BLT, BGE, BLTU, BGEU). B-type.
pub const OP_BRANCH: u32 = 0b110_0011;

/// Jump and link register. I-type.
pub const OP_JALR: u32 = 0b110_0111;

/// Jump and link. J-type.
pub const OP_JAL: u32 = 0b110_1111;

/// Environment call / breakpoint. Not modeled; decodes to a bubble.
pub const OP_SYSTEM: u32 = 0b111_0011;
