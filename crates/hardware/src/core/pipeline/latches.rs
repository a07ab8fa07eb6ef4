//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages
//! (Fetch → Decode → Execute → Memory → Writeback) and the single generic
//! register that holds them:
//! 1. **Instruction Flow:** One entry type per boundary (IF/ID, ID/EX, EX/MEM, MEM/WB).
//! 2. **Tagged Transition:** `LatchCtrl` resolves stall and flush into exactly one
//!    of load, hold, or flush, with flush taking precedence.
//! 3. **Reset:** Every register clears to its entry's bubble.

use serde::Serialize;

use crate::common::constants::NOP_INSTRUCTION;
use crate::core::pipeline::signals::{ControlSignals, ResultSrc};
use crate::core::pipeline::traits::PipelineLatch;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IfIdEntry {
    /// Byte address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IdExEntry {
    /// Byte address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First source register read, or `x0` if the format has none.
    pub rs1: usize,
    /// Second source register read, or `x0` if the format has none.
    pub rs2: usize,
    /// Destination register index (rd).
    pub rd: usize,
    /// Extended immediate value.
    pub imm: i32,
    /// Value read from rs1 register.
    pub rv1: u32,
    /// Value read from rs2 register.
    pub rv2: u32,
    /// `pc + imm`, the target of a taken branch or of JAL.
    pub branch_target: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExMemEntry {
    /// Byte address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index (rd).
    pub rd: usize,
    /// ALU result; the effective address for loads and stores.
    pub alu: u32,
    /// Forwarded rs2 value to be stored.
    pub store_data: u32,
    /// Return address for JAL/JALR.
    pub pc_plus4: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemWbEntry {
    /// Byte address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index (rd).
    pub rd: usize,
    /// ALU result.
    pub alu: u32,
    /// Extended value read from data memory.
    pub load_data: u32,
    /// Return address for JAL/JALR.
    pub pc_plus4: u32,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

impl ExMemEntry {
    /// Value this instruction will write back, as visible to the forwarding path.
    ///
    /// Loads have not read memory yet, so their ALU address is returned; the
    /// load-use stall keeps consumers from ever selecting it.
    pub const fn forward_value(&self) -> u32 {
        match self.ctrl.result_src {
            ResultSrc::PcPlus4 => self.pc_plus4,
            ResultSrc::Alu | ResultSrc::Mem => self.alu,
        }
    }
}

impl MemWbEntry {
    /// Value written to `rd`, selected by `result_src`.
    pub const fn result(&self) -> u32 {
        match self.ctrl.result_src {
            ResultSrc::Alu => self.alu,
            ResultSrc::Mem => self.load_data,
            ResultSrc::PcPlus4 => self.pc_plus4,
        }
    }
}

impl Default for IfIdEntry {
    fn default() -> Self {
        Self::bubble()
    }
}

impl PipelineLatch for IfIdEntry {
    fn bubble() -> Self {
        Self {
            pc: 0,
            inst: NOP_INSTRUCTION,
        }
    }

    fn is_bubble(&self) -> bool {
        self.inst == NOP_INSTRUCTION
    }
}

impl PipelineLatch for IdExEntry {
    fn bubble() -> Self {
        Self {
            inst: NOP_INSTRUCTION,
            ..Self::default()
        }
    }

    fn is_bubble(&self) -> bool {
        self.inst == NOP_INSTRUCTION || self.ctrl.is_nop()
    }
}

impl PipelineLatch for ExMemEntry {
    fn bubble() -> Self {
        Self {
            inst: NOP_INSTRUCTION,
            ..Self::default()
        }
    }

    fn is_bubble(&self) -> bool {
        self.inst == NOP_INSTRUCTION || self.ctrl.is_nop()
    }
}

impl PipelineLatch for MemWbEntry {
    fn bubble() -> Self {
        Self {
            inst: NOP_INSTRUCTION,
            ..Self::default()
        }
    }

    fn is_bubble(&self) -> bool {
        self.inst == NOP_INSTRUCTION || self.ctrl.is_nop()
    }
}

/// Transition a pipeline register takes on a clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum LatchCtrl {
    /// Capture the value presented at the input.
    #[default]
    Load,
    /// Keep the previous output.
    Hold,
    /// Capture the bubble.
    Flush,
}

impl LatchCtrl {
    /// Resolves the stall and flush inputs. Flush overrides stall.
    pub const fn from_inputs(stall: bool, flush: bool) -> Self {
        match (flush, stall) {
            (true, _) => Self::Flush,
            (false, true) => Self::Hold,
            (false, false) => Self::Load,
        }
    }
}

/// A synchronous pipeline register.
///
/// The four instances in the core differ only in payload type, so stall,
/// flush and reset behave identically across them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineRegister<T: PipelineLatch> {
    out: T,
}

impl<T: PipelineLatch> Default for PipelineRegister<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PipelineLatch> PipelineRegister<T> {
    /// Creates a register holding a bubble.
    pub fn new() -> Self {
        Self { out: T::bubble() }
    }

    /// Current output, as seen by the downstream stage this cycle.
    pub const fn output(&self) -> &T {
        &self.out
    }

    /// Applies one rising clock edge.
    pub fn clock(&mut self, next: T, ctrl: LatchCtrl) {
        match ctrl {
            LatchCtrl::Load => self.out = next,
            LatchCtrl::Hold => {}
            LatchCtrl::Flush => self.out = T::bubble(),
        }
    }

    /// Clears the register to a bubble.
    pub fn reset(&mut self) {
        self.out = T::bubble();
    }
}
