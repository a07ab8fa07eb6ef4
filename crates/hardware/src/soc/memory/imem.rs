//! Instruction Memory.
//!
//! A word array mapped at address 0 and read by the fetch stage. Fetch
//! addresses are byte addresses with the low two bits ignored. Every
//! location not written by the loader, and every address past the end of
//! the array, reads as the canonical NOP.

use crate::common::constants::{NOP_INSTRUCTION, WORD_SHIFT};
use crate::common::error::{Result, SimError};

/// Read-only (from the core's perspective) instruction store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    words: Vec<u32>,
    loaded: usize,
}

impl InstructionMemory {
    /// Creates a NOP-filled memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![NOP_INSTRUCTION; capacity],
            loaded: 0,
        }
    }

    /// Capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Replaces the contents with `program`, starting at address 0.
    ///
    /// Locations past the program are reset to NOP.
    ///
    /// # Errors
    ///
    /// Returns `SimError::ProgramTooLarge` if the program does not fit; the
    /// memory is left unchanged in that case.
    pub fn load(&mut self, program: &[u32]) -> Result<()> {
        if program.len() > self.words.len() {
            return Err(SimError::ProgramTooLarge {
                words: program.len(),
                capacity: self.words.len(),
            });
        }
        self.words.fill(NOP_INSTRUCTION);
        self.words[..program.len()].copy_from_slice(program);
        self.loaded = program.len();
        tracing::info!(words = program.len(), "program loaded into instruction memory");
        Ok(())
    }

    /// Fetches the instruction containing byte address `addr`.
    pub fn fetch(&self, addr: u32) -> u32 {
        let index = (addr >> WORD_SHIFT) as usize;
        self.words.get(index).copied().unwrap_or(NOP_INSTRUCTION)
    }

    /// Byte address one past the last loaded instruction.
    pub fn program_end(&self) -> u32 {
        (self.loaded as u32) << WORD_SHIFT
    }

    /// The loaded program, without trailing NOP fill.
    pub fn program(&self) -> &[u32] {
        &self.words[..self.loaded]
    }
}

impl Default for InstructionMemory {
    fn default() -> Self {
        Self::new(crate::common::constants::DEFAULT_IMEM_WORDS)
    }
}
