//! Main Execution Loop.
//!
//! One call to [`Cpu::tick`] is one rising clock edge:
//! 1. **Evaluate:** Every stage, the hazard unit, and the forwarding unit are
//!    computed from the current register outputs, back to front.
//! 2. **Commit:** Register file, data memory, PC, and the four pipeline
//!    registers update together from those results.
//!
//! Hazard outputs are wired as follows:
//!
//! | Signal     | Drives                  |
//! |------------|-------------------------|
//! | `stall_if` | PC hold                 |
//! | `stall_id` | IF/ID hold              |
//! | `flush_if` | IF/ID flush             |
//! | `flush_id` | ID/EX flush             |
//! | `flush_ex` | ID/EX flush             |
//!
//! EX/MEM and MEM/WB always load. Branches and jumps both redirect from EX,
//! and the jump flag given to the hazard unit is the one decoded into ID/EX,
//! so the two younger instructions are discarded while the jump itself
//! completes and writes its link register.

use super::{Cpu, CycleSnapshot};
use crate::core::arch::pc::PcInputs;
use crate::core::pipeline::forwarding::{ForwardInputs, ForwardingUnit};
use crate::core::pipeline::hazards::{HazardInputs, HazardUnit};
use crate::core::pipeline::latches::LatchCtrl;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Advances the core by one clock cycle.
    pub fn tick(&mut self) {
        self.cycle += 1;

        if self.reset_asserted {
            self.reset();
            self.last = CycleSnapshot {
                cycle: self.cycle,
                in_reset: true,
                pc: self.pc(),
                latches: self.latches(),
                ..CycleSnapshot::default()
            };
            return;
        }

        let latches = self.latches();
        let (if_id, id_ex, ex_mem, mem_wb) =
            (latches.if_id, latches.id_ex, latches.ex_mem, latches.mem_wb);

        // Evaluate, back to front.
        let wb = wb_stage(&mem_wb);
        let mem_out = mem_stage(&ex_mem, &self.dmem);

        let forwarding = ForwardingUnit::resolve(&ForwardInputs {
            ex_rs1: id_ex.rs1,
            ex_rs2: id_ex.rs2,
            mem_rd: ex_mem.rd,
            mem_reg_write: ex_mem.ctrl.reg_write,
            wb_rd: mem_wb.rd,
            wb_reg_write: mem_wb.ctrl.reg_write,
        });
        let ex_out = execute_stage(&id_ex, forwarding, ex_mem.forward_value(), wb.data);
        let id_out = decode_stage(&if_id, &self.regs, wb);
        let if_out = fetch_stage(&self.pc, &self.imem);

        let hazards = HazardUnit::detect(&HazardInputs {
            id_rs1: id_out.rs1,
            id_rs2: id_out.rs2,
            ex_rd: id_ex.rd,
            ex_mem_read: id_ex.ctrl.mem_read,
            ex_reg_write: id_ex.ctrl.reg_write,
            ex_branch: id_ex.ctrl.branch,
            ex_jump: id_ex.ctrl.jump,
            ex_branch_taken: ex_out.branch_taken,
        });

        if hazards.is_load_use_stall() {
            tracing::debug!(cycle = self.cycle, pc = if_id.pc, rd = id_ex.rd, "load-use stall");
        }
        if hazards.is_control_flush() {
            tracing::debug!(cycle = self.cycle, pc = id_ex.pc, "control flush");
        }
        if self.trace {
            tracing::trace!(
                cycle = self.cycle,
                "IF {:#010x} {:<24} | ID {:<24} | EX {:<24} | MEM {:<24} | WB {}",
                if_out.pc,
                disassemble(if_out.inst),
                disassemble(if_id.inst),
                disassemble(id_ex.inst),
                disassemble(ex_mem.inst),
                disassemble(mem_wb.inst),
            );
        }

        // Commit.
        self.regs.clock(wb);
        if let Some(store) = mem_out.store {
            self.dmem.store(store.addr, store.data, store.width);
        }
        let unit = self.pc.unit();
        self.pc.tick(PcInputs {
            stall: hazards.stall_if,
            branch_taken: ex_out.redirect.is_some(),
            branch_target: unit.from_byte_addr(ex_out.redirect.unwrap_or_default()),
        });
        self.if_id
            .clock(if_out, LatchCtrl::from_inputs(hazards.stall_id, hazards.flush_if));
        self.id_ex.clock(
            id_out,
            LatchCtrl::from_inputs(false, hazards.flush_id || hazards.flush_ex),
        );
        self.ex_mem.clock(ex_out.ex_mem, LatchCtrl::Load);
        self.mem_wb.clock(mem_out.mem_wb, LatchCtrl::Load);

        self.last = CycleSnapshot {
            cycle: self.cycle,
            in_reset: false,
            pc: if_out.pc,
            instruction: if_out.inst,
            latches,
            hazards,
            forwarding,
            alu: ex_out.alu,
            branch_taken: ex_out.branch_taken,
            redirect: ex_out.redirect,
            writeback: wb,
            store: mem_out.store,
        };
    }
}
