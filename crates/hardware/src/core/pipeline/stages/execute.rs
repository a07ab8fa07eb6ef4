//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Selection:** Applies the forwarding selects to `rs1`/`rs2`, then
//!    picks operand A (register, PC, or zero) and operand B (register or immediate).
//! 2. **Execution:** Runs the ALU.
//! 3. **Branch Resolution:** Evaluates the branch predicate on the forwarded operands.
//! 4. **Redirect:** Produces the new fetch address for taken branches, JAL, and JALR.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::pipeline::forwarding::ForwardSignals;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::pipeline::signals::OpASrc;
use crate::core::units::alu::{Alu, AluResult};

/// Everything the execute stage produces in one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Entry presented at the EX/MEM register input.
    pub ex_mem: ExMemEntry,
    /// ALU result and flags.
    pub alu: AluResult,
    /// A conditional branch resolved taken.
    pub branch_taken: bool,
    /// Byte address to fetch next, for a taken branch or any jump.
    pub redirect: Option<u32>,
}

/// Executes the execute stage.
///
/// # Arguments
///
/// * `id_ex`     - Output of the ID/EX register.
/// * `fwd`       - Forwarding selects for both operands.
/// * `mem_value` - Result forwarded from EX/MEM.
/// * `wb_value`  - Result forwarded from MEM/WB.
pub fn execute_stage(
    id_ex: &IdExEntry,
    fwd: ForwardSignals,
    mem_value: u32,
    wb_value: u32,
) -> ExecuteOutput {
    let ctrl = id_ex.ctrl;
    let rs1_val = fwd.forward_a.select(id_ex.rv1, mem_value, wb_value);
    let rs2_val = fwd.forward_b.select(id_ex.rv2, mem_value, wb_value);

    let op_a = match ctrl.a_src {
        OpASrc::Reg1 => rs1_val,
        OpASrc::Pc => id_ex.pc,
        OpASrc::Zero => 0,
    };
    let op_b = if ctrl.alu_src { id_ex.imm as u32 } else { rs2_val };

    let alu = Alu::execute(ctrl.alu_op, op_a, op_b);

    let branch_taken = ctrl.branch && ctrl.branch_cond.evaluate(rs1_val, rs2_val);
    let redirect = if branch_taken {
        Some(id_ex.branch_target)
    } else if ctrl.jump {
        // JAL has no register operand; JALR computes rs1 + imm in the ALU.
        Some(if ctrl.alu_src {
            alu.result & !1
        } else {
            id_ex.branch_target
        })
    } else {
        None
    };

    if let Some(target) = redirect {
        tracing::trace!(
            pc = id_ex.pc,
            target,
            jump = ctrl.jump,
            "control transfer resolved in EX"
        );
    }

    ExecuteOutput {
        ex_mem: ExMemEntry {
            pc: id_ex.pc,
            inst: id_ex.inst,
            rd: id_ex.rd,
            alu: alu.result,
            store_data: rs2_val,
            pc_plus4: id_ex.pc.wrapping_add(INSTRUCTION_SIZE),
            ctrl,
        },
        alu,
        branch_taken,
        redirect,
    }
}
