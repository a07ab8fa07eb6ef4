//! Global Constants.
//!
//! 1. **Instruction Constants:** Width of an instruction and the canonical NOP.
//! 2. **Register Constants:** Architectural register count.
//! 3. **Memory Constants:** Default sizes and base addresses of the two memories.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Shift converting between byte addresses and word indices.
pub const WORD_SHIFT: u32 = 2;

/// Mask of the byte-within-word bits of an address.
pub const WORD_OFFSET_MASK: u32 = INSTRUCTION_SIZE - 1;

/// Canonical no-op: `addi x0, x0, 0`.
///
/// Loaded into the IF/ID register on flush and reset, and returned by
/// instruction memory for any unpopulated or out-of-range fetch.
pub const NOP_INSTRUCTION: u32 = 0x0000_0013;

/// Number of general-purpose integer registers.
pub const NUM_REGISTERS: usize = 32;

/// Default instruction memory capacity in 32-bit words.
pub const DEFAULT_IMEM_WORDS: usize = 1024;

/// Default data memory base address.
pub const DEFAULT_DMEM_BASE: u32 = 0x1000;

/// Default data memory size in bytes.
pub const DEFAULT_DMEM_SIZE: usize = 4096;
