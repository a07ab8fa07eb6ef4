//! Instruction and Data Memories.
//!
//! 1. **Instruction Memory:** Word array, NOP-filled, word-aligned fetch.
//! 2. **Data Memory:** Byte array behind a word port with byte enables.
//!
//! Neither memory can fault: addresses outside their range read as a fixed
//! value and writes to them are dropped.

/// Byte-addressable data memory with a byte-enable word port.
pub mod dmem;

/// Word-addressed instruction memory.
pub mod imem;

pub use dmem::DataMemory;
pub use imem::InstructionMemory;
