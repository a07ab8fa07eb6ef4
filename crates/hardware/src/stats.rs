//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline model. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics.
//! 2. **Instruction mix:** Retired loads, stores, branches, jumps and ALU operations.
//! 3. **Hazards:** Load-use stall cycles, control flushes and taken branches.
//! 4. **Forwarding:** Operand bypasses from the MEM and WB stages.

use std::time::Instant;

use crate::core::cpu::CycleSnapshot;
use crate::core::pipeline::forwarding::ForwardSel;
use crate::sim::Observer;

/// Simulation statistics structure tracking all performance metrics.
///
/// Gathered purely from cycle snapshots, so it can be attached to any run
/// without affecting it.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed (including reset cycles).
    pub cycles: u64,
    /// Number of instructions that left the MEM/WB register.
    pub instructions_retired: u64,

    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired conditional branches.
    pub inst_branch: u64,
    /// Retired `JAL`/`JALR`.
    pub inst_jump: u64,
    /// Retired register-writing ALU operations.
    pub inst_alu: u64,

    /// Cycles the front end was held by a load-use hazard.
    pub stalls_load_use: u64,
    /// Cycles in which a taken branch or jump flushed the front end.
    pub control_flushes: u64,
    /// Conditional branches resolved taken.
    pub branches_taken: u64,

    /// Operands bypassed from EX/MEM.
    pub forwards_mem: u64,
    /// Operands bypassed from MEM/WB.
    pub forwards_wb: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_alu: 0,
            stalls_load_use: 0,
            control_flushes: 0,
            branches_taken: 0,
            forwards_mem: 0,
            forwards_wb: 0,
        }
    }
}

impl SimStats {
    /// Cycles per retired instruction, or 0.0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Total operand bypasses from either stage.
    pub const fn forwards(&self) -> u64 {
        self.forwards_mem + self.forwards_wb
    }

    /// Renders the statistics report.
    pub fn report(&self) -> String {
        use std::fmt::Write;

        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "RV32I PIPELINE SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_cycles               {}", self.cycles);
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "sim_cpi                  {:.4}", self.cpi());
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, n) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
        ] {
            let _ = writeln!(out, "  {name:<22} {n} ({:.2}%)", pct(n, instr));
        }
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "HAZARDS");
        let _ = writeln!(
            out,
            "  stalls.load_use        {} ({:.2}%)",
            self.stalls_load_use,
            pct(self.stalls_load_use, cyc)
        );
        let _ = writeln!(
            out,
            "  flushes.control        {} ({:.2}%)",
            self.control_flushes,
            pct(self.control_flushes, cyc)
        );
        let _ = writeln!(out, "  branches.taken         {}", self.branches_taken);
        let _ = writeln!(out, "  forwards.mem           {}", self.forwards_mem);
        let _ = writeln!(out, "  forwards.wb            {}", self.forwards_wb);
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        print!("{}", self.report());
    }
}

impl Observer for SimStats {
    fn on_cycle(&mut self, snapshot: &CycleSnapshot) {
        self.cycles += 1;
        if snapshot.in_reset {
            return;
        }

        if snapshot.retired() {
            self.instructions_retired += 1;
            let ctrl = snapshot.latches.mem_wb.ctrl;
            if ctrl.mem_read {
                self.inst_load += 1;
            } else if ctrl.mem_write {
                self.inst_store += 1;
            } else if ctrl.branch {
                self.inst_branch += 1;
            } else if ctrl.jump {
                self.inst_jump += 1;
            } else {
                self.inst_alu += 1;
            }
        }

        if snapshot.hazards.is_load_use_stall() {
            self.stalls_load_use += 1;
        }
        if snapshot.hazards.is_control_flush() {
            self.control_flushes += 1;
        }
        if snapshot.branch_taken {
            self.branches_taken += 1;
        }

        for sel in [snapshot.forwarding.forward_a, snapshot.forwarding.forward_b] {
            match sel {
                ForwardSel::FromMem => self.forwards_mem += 1,
                ForwardSel::FromWb => self.forwards_wb += 1,
                ForwardSel::None => {}
            }
        }
    }
}
