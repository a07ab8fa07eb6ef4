//! Writeback (WB) Stage.
//!
//! Selects the result named by `result_src` and drives the register file's
//! write port. The port also feeds the forwarding path and the ID-stage
//! write-through, since the register file itself only shows the new value
//! from the next cycle on.

use crate::core::arch::gpr::WritePort;
use crate::core::pipeline::latches::MemWbEntry;

/// Executes the writeback stage.
pub const fn wb_stage(mem_wb: &MemWbEntry) -> WritePort {
    WritePort {
        enable: mem_wb.ctrl.reg_write,
        rd: mem_wb.rd,
        data: mem_wb.result(),
    }
}
