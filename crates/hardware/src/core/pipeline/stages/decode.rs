//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Runs the control unit over the raw instruction bits.
//! 2. **Register Read:** Reads the sources the format uses; unused source
//!    slots are latched as `x0`.
//! 3. **Write-through:** Substitutes the value being written back this cycle
//!    for a stale read of the same register.
//! 4. **Target Generation:** Computes `pc + imm` for branches and JAL.

use crate::core::arch::gpr::{RegisterFile, WritePort};
use crate::core::pipeline::forwarding::ForwardingUnit;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::units::control::ControlUnit;
use crate::isa::decode::source_registers;
use crate::isa::instruction::InstructionBits;

/// Executes the decode stage.
///
/// # Arguments
///
/// * `if_id` - Output of the IF/ID register.
/// * `regs`  - Register file, read before this cycle's write commits.
/// * `wb`    - Write port driven by the writeback stage this cycle.
///
/// # Returns
///
/// The entry presented at the ID/EX register input this cycle.
pub fn decode_stage(if_id: &IfIdEntry, regs: &RegisterFile, wb: WritePort) -> IdExEntry {
    let inst = if_id.inst;
    let word = ControlUnit::decode(inst);
    let (rs1, rs2) = source_registers(inst);

    let rv1 = ForwardingUnit::write_through(rs1, regs.read(rs1), wb);
    let rv2 = ForwardingUnit::write_through(rs2, regs.read(rs2), wb);

    IdExEntry {
        pc: if_id.pc,
        inst,
        rs1,
        rs2,
        rd: inst.rd(),
        imm: word.imm,
        rv1,
        rv2,
        branch_target: if_id.pc.wrapping_add(word.imm as u32),
        ctrl: word.signals,
    }
}
