//! Forwarding Unit.
//!
//! Selects, for each EX operand, whether to use the value latched from the
//! register file or a result still in flight:
//! 1. **FROM_MEM:** the instruction one ahead (in MEM) writes the source register.
//! 2. **FROM_WB:** otherwise, the instruction two ahead (in WB) writes it.
//! 3. **NONE:** otherwise, the latched register value is current.
//!
//! MEM strictly wins over WB because it holds the younger result. The same
//! dependence rule also drives the ID-stage write-through, which covers the
//! three-instruction distance that the register file's write-after-read
//! ordering would otherwise miss.

use serde::Serialize;

use crate::core::arch::gpr::WritePort;
use crate::core::pipeline::hazards::depends_on;

/// Operand source selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ForwardSel {
    /// Register file value latched in ID/EX.
    #[default]
    None = 0,
    /// Result held in EX/MEM.
    FromMem = 1,
    /// Result held in MEM/WB.
    FromWb = 2,
}

impl ForwardSel {
    /// Two-bit mux select encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Drives the operand mux.
    pub const fn select(self, reg: u32, mem: u32, wb: u32) -> u32 {
        match self {
            Self::None => reg,
            Self::FromMem => mem,
            Self::FromWb => wb,
        }
    }
}

/// Observed state the forwarding unit decides on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ForwardInputs {
    /// First source register of the instruction in EX.
    pub ex_rs1: usize,
    /// Second source register of the instruction in EX.
    pub ex_rs2: usize,
    /// Destination register of the instruction in MEM.
    pub mem_rd: usize,
    /// The instruction in MEM writes a register.
    pub mem_reg_write: bool,
    /// Destination register of the instruction in WB.
    pub wb_rd: usize,
    /// The instruction in WB writes a register.
    pub wb_reg_write: bool,
}

/// Mux selects for both EX operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ForwardSignals {
    /// Source for operand A (`rs1`).
    pub forward_a: ForwardSel,
    /// Source for operand B (`rs2`, also the store data).
    pub forward_b: ForwardSel,
}

/// Stateless forwarding unit.
#[derive(Debug)]
pub struct ForwardingUnit;

impl ForwardingUnit {
    /// Selects the source for a single operand.
    pub const fn select(src: usize, inputs: &ForwardInputs) -> ForwardSel {
        if depends_on(inputs.mem_rd, inputs.mem_reg_write, src) {
            ForwardSel::FromMem
        } else if depends_on(inputs.wb_rd, inputs.wb_reg_write, src) {
            ForwardSel::FromWb
        } else {
            ForwardSel::None
        }
    }

    /// Computes both operand selects.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::pipeline::forwarding::{ForwardInputs, ForwardSel, ForwardingUnit};
    ///
    /// let fwd = ForwardingUnit::resolve(&ForwardInputs {
    ///     ex_rs1: 3,
    ///     ex_rs2: 4,
    ///     mem_rd: 3,
    ///     mem_reg_write: true,
    ///     wb_rd: 3,
    ///     wb_reg_write: true,
    /// });
    /// assert_eq!(fwd.forward_a, ForwardSel::FromMem);
    /// assert_eq!(fwd.forward_b, ForwardSel::None);
    /// ```
    pub const fn resolve(inputs: &ForwardInputs) -> ForwardSignals {
        ForwardSignals {
            forward_a: Self::select(inputs.ex_rs1, inputs),
            forward_b: Self::select(inputs.ex_rs2, inputs),
        }
    }

    /// ID-stage write-through: the value decode should latch for `src`.
    ///
    /// If the instruction in WB is writing `src` this cycle, its result
    /// replaces the stale register file read.
    pub const fn write_through(src: usize, reg_value: u32, wb: WritePort) -> u32 {
        if depends_on(wb.rd, wb.enable, src) {
            wb.data
        } else {
            reg_value
        }
    }
}
