//! Observation records.
//!
//! Everything here is a copy taken after the fact. Nothing feeds back into
//! execution, so observers can be attached or dropped without changing a
//! single cycle of behaviour.

use serde::Serialize;

use crate::core::arch::gpr::WritePort;
use crate::core::pipeline::forwarding::ForwardSignals;
use crate::core::pipeline::hazards::HazardSignals;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::pipeline::stages::StoreRequest;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::alu::AluResult;

/// Outputs of the four pipeline registers at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LatchView {
    /// IF/ID register.
    pub if_id: IfIdEntry,
    /// ID/EX register.
    pub id_ex: IdExEntry,
    /// EX/MEM register.
    pub ex_mem: ExMemEntry,
    /// MEM/WB register.
    pub mem_wb: MemWbEntry,
}

/// Everything observable about one clock cycle.
///
/// `latches` are the register outputs the stages computed from, i.e. the
/// state before this cycle's edge. The remaining fields are the
/// combinational results that the edge then committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CycleSnapshot {
    /// 1-based cycle number.
    pub cycle: u64,
    /// The reset input was asserted on this edge.
    pub in_reset: bool,
    /// Fetch address.
    pub pc: u32,
    /// Instruction fetched.
    pub instruction: u32,
    /// Pipeline register outputs during the cycle.
    pub latches: LatchView,
    /// Hazard unit outputs.
    pub hazards: HazardSignals,
    /// Forwarding selects applied in EX.
    pub forwarding: ForwardSignals,
    /// ALU output in EX.
    pub alu: AluResult,
    /// A conditional branch resolved taken in EX.
    pub branch_taken: bool,
    /// Byte address loaded into the PC by a taken branch or a jump.
    pub redirect: Option<u32>,
    /// Register file write committed on the edge.
    pub writeback: WritePort,
    /// Data memory store committed on the edge.
    pub store: Option<StoreRequest>,
}

impl CycleSnapshot {
    /// True if an instruction left the pipeline this cycle.
    pub fn retired(&self) -> bool {
        !self.in_reset && !self.latches.mem_wb.is_bubble()
    }
}
