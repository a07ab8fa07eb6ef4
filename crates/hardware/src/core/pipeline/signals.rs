//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** The 4-bit ALU operation code.
//! 2. **Operand Selection:** Sources for ALU operand A and the register/immediate choice for B.
//! 3. **Memory Control:** Access widths and sign-extension requirements.
//! 4. **Flow Control:** Branch predicates and write-back result selection.
//!
//! The all-default `ControlSignals` value is the NOP bundle: it writes nothing,
//! touches no memory, and never redirects the program counter.

use serde::Serialize;

/// ALU operation codes.
///
/// The low three bits of each code equal the instruction's funct3 and bit 3
/// equals instruction bit 30, so SUB and SRA differ from ADD and SRL only in
/// the high bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add = 0b0000,
    /// Shift left logical.
    Sll = 0b0001,
    /// Set less than (signed).
    Slt = 0b0010,
    /// Set less than unsigned.
    Sltu = 0b0011,
    /// Bitwise XOR.
    Xor = 0b0100,
    /// Shift right logical.
    Srl = 0b0101,
    /// Bitwise OR.
    Or = 0b0110,
    /// Bitwise AND.
    And = 0b0111,
    /// Wrapping subtraction.
    Sub = 0b1000,
    /// Shift right arithmetic.
    Sra = 0b1101,
}

impl AluOp {
    /// Bit distinguishing SUB from ADD and SRA from SRL.
    pub const ALT_BIT: u8 = 0b1000;

    /// Every defined operation, in code order.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Or,
        Self::And,
        Self::Sub,
        Self::Sra,
    ];

    /// Returns the 4-bit operation code.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Maps a 4-bit code back to an operation; `None` for unassigned codes.
    pub const fn from_bits(code: u8) -> Option<Self> {
        Some(match code {
            0b0000 => Self::Add,
            0b0001 => Self::Sll,
            0b0010 => Self::Slt,
            0b0011 => Self::Sltu,
            0b0100 => Self::Xor,
            0b0101 => Self::Srl,
            0b0110 => Self::Or,
            0b0111 => Self::And,
            0b1000 => Self::Sub,
            0b1101 => Self::Sra,
            _ => return None,
        })
    }

    /// Builds the operation from funct3 and the alternate-encoding bit.
    ///
    /// The alternate bit is honoured only where it selects a distinct
    /// operation (ADD/SUB, SRL/SRA); elsewhere it is ignored.
    pub const fn from_funct(funct3: u32, alt: bool) -> Self {
        let code = (funct3 & 0b111) as u8 | if alt { Self::ALT_BIT } else { 0 };
        match Self::from_bits(code) {
            Some(op) => op,
            None => match Self::from_bits(code & !Self::ALT_BIT) {
                Some(op) => op,
                None => Self::Add,
            },
        }
    }
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum OpASrc {
    /// The (possibly forwarded) `rs1` value.
    #[default]
    Reg1,
    /// The instruction's own PC (AUIPC).
    Pc,
    /// Constant zero (LUI).
    Zero,
}

/// Data memory access width (`mem_size`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum MemWidth {
    /// 8-bit access.
    #[default]
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
}

impl MemWidth {
    /// Maps the low two bits of a load/store funct3 to an access width.
    pub const fn from_funct3(funct3: u32) -> Self {
        match funct3 & 0b11 {
            0b00 => Self::Byte,
            0b01 => Self::Half,
            _ => Self::Word,
        }
    }

    /// Access size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// Value written back to the destination register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ResultSrc {
    /// ALU result.
    #[default]
    Alu,
    /// Data memory read.
    Mem,
    /// Return address (`pc + 4`) for JAL/JALR.
    PcPlus4,
}

/// Conditional branch predicate, keyed by funct3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BranchCond {
    /// `a == b`
    #[default]
    Eq,
    /// `a != b`
    Ne,
    /// `a < b` (signed)
    Lt,
    /// `a >= b` (signed)
    Ge,
    /// `a < b` (unsigned)
    Ltu,
    /// `a >= b` (unsigned)
    Geu,
}

impl BranchCond {
    /// Maps a branch funct3 to its predicate. Reserved encodings (010, 011) yield `None`.
    pub const fn from_funct3(funct3: u32) -> Option<Self> {
        match funct3 {
            0b000 => Some(Self::Eq),
            0b001 => Some(Self::Ne),
            0b100 => Some(Self::Lt),
            0b101 => Some(Self::Ge),
            0b110 => Some(Self::Ltu),
            0b111 => Some(Self::Geu),
            _ => None,
        }
    }

    /// Evaluates the predicate on two operand values.
    pub const fn evaluate(self, a: u32, b: u32) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Lt => (a as i32) < (b as i32),
            Self::Ge => (a as i32) >= (b as i32),
            Self::Ltu => a < b,
            Self::Geu => a >= b,
        }
    }
}

/// Control signals generated by the decode stage.
///
/// Produced once per instruction and carried unchanged through every
/// pipeline register until write-back; cleared to `Default` on flush.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// ALU operand B is the immediate rather than `rs2`.
    pub alu_src: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump (`JAL`/`JALR`).
    pub jump: bool,
    /// Selects the write-back value.
    pub result_src: ResultSrc,
    /// Width of memory access.
    pub mem_size: MemWidth,
    /// Load should be sign-extended.
    pub signed_load: bool,
    /// ALU operation to perform.
    pub alu_op: AluOp,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Predicate evaluated when `branch` is set.
    pub branch_cond: BranchCond,
}

impl ControlSignals {
    /// True if the bundle has no architectural effect.
    pub const fn is_nop(&self) -> bool {
        !self.reg_write && !self.mem_write && !self.mem_read && !self.branch && !self.jump
    }
}
