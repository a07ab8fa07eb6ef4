//! Instruction Fetch (IF) Stage.
//!
//! Reads the instruction at the program counter's byte address. There is no
//! prediction: the next PC is always sequential unless EX redirects it.

use crate::core::arch::pc::ProgramCounter;
use crate::core::pipeline::latches::IfIdEntry;
use crate::soc::InstructionMemory;

/// Executes the instruction fetch stage.
///
/// # Returns
///
/// The entry presented at the IF/ID register input this cycle.
pub fn fetch_stage(pc: &ProgramCounter, imem: &InstructionMemory) -> IfIdEntry {
    let addr = pc.byte_address();
    IfIdEntry {
        pc: addr,
        inst: imem.fetch(addr),
    }
}
