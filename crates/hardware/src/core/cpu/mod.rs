//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Register file, program counter, and the four pipeline registers.
//! 2. **Memories:** Instruction and data memories owned by the core.
//! 3. **Reset:** A level-sensitive reset input sampled on each clock edge.
//! 4. **Observation:** Read-only debug ports and a per-cycle snapshot.

/// Per-cycle observation records.
pub mod debug;

/// Clock edge evaluation and commit.
pub mod execution;

use crate::config::Config;
use crate::core::arch::gpr::RegisterFile;
use crate::core::arch::pc::ProgramCounter;
use crate::core::pipeline::latches::{
    ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry, PipelineRegister,
};
use crate::core::pipeline::traits::PipelineLatch;
use crate::soc::{DataMemory, InstructionMemory};

pub use debug::{CycleSnapshot, LatchView};

/// Main CPU structure containing all processor state.
///
/// The only sequential elements are the program counter, the register file,
/// the four pipeline registers, and data memory. Everything else is
/// recomputed from them every cycle.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Instruction memory.
    pub imem: InstructionMemory,
    /// Data memory.
    pub dmem: DataMemory,
    /// Emit a per-cycle pipeline trace.
    pub trace: bool,

    pc: ProgramCounter,
    if_id: PipelineRegister<IfIdEntry>,
    id_ex: PipelineRegister<IdExEntry>,
    ex_mem: PipelineRegister<ExMemEntry>,
    mem_wb: PipelineRegister<MemWbEntry>,

    reset_asserted: bool,
    cycle: u64,
    last: CycleSnapshot,
}

impl Cpu {
    /// Creates a CPU in its post-reset state.
    pub fn new(config: &Config) -> Self {
        let unit = config.pipeline.pc_unit;
        Self {
            regs: RegisterFile::new(),
            imem: InstructionMemory::new(config.memory.imem_words),
            dmem: DataMemory::new(config.memory.dmem_base, config.memory.dmem_size),
            trace: config.general.trace_instructions,
            pc: ProgramCounter::new(unit.from_byte_addr(config.general.reset_pc), unit),
            if_id: PipelineRegister::new(),
            id_ex: PipelineRegister::new(),
            ex_mem: PipelineRegister::new(),
            mem_wb: PipelineRegister::new(),
            reset_asserted: false,
            cycle: 0,
            last: CycleSnapshot::default(),
        }
    }

    /// Drives the reset input.
    ///
    /// While asserted, every clock edge holds the PC at its reset address and
    /// all pipeline registers at NOP. Normal operation resumes on the first
    /// edge after release.
    pub const fn set_reset(&mut self, asserted: bool) {
        self.reset_asserted = asserted;
    }

    /// True while the reset input is asserted.
    pub const fn in_reset(&self) -> bool {
        self.reset_asserted
    }

    /// Applies reset immediately, without consuming a cycle.
    ///
    /// The register file and memories keep their contents.
    pub fn reset(&mut self) {
        self.pc.reset();
        self.if_id.reset();
        self.id_ex.reset();
        self.ex_mem.reset();
        self.mem_wb.reset();
    }

    /// Number of clock edges applied so far.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Current fetch address in bytes.
    pub const fn pc(&self) -> u32 {
        self.pc.byte_address()
    }

    /// The program counter itself, in its configured unit.
    pub const fn program_counter(&self) -> &ProgramCounter {
        &self.pc
    }

    /// Instruction at the current fetch address.
    pub fn current_instruction(&self) -> u32 {
        self.imem.fetch(self.pc())
    }

    /// Current outputs of all four pipeline registers.
    pub const fn latches(&self) -> LatchView {
        LatchView {
            if_id: *self.if_id.output(),
            id_ex: *self.id_ex.output(),
            ex_mem: *self.ex_mem.output(),
            mem_wb: *self.mem_wb.output(),
        }
    }

    /// Signals observed during the most recent clock cycle.
    pub const fn last_cycle(&self) -> &CycleSnapshot {
        &self.last
    }

    /// True once fetch has run past the loaded program and every pipeline
    /// register holds a bubble.
    pub fn is_idle(&self) -> bool {
        self.pc() >= self.imem.program_end()
            && self.if_id.output().is_bubble()
            && self.id_ex.output().is_bubble()
            && self.ex_mem.output().is_bubble()
            && self.mem_wb.output().is_bubble()
    }
}
