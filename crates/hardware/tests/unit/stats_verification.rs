//! Statistics Verification.
//!
//! Runs small programs whose hazard profile is known cycle by cycle and
//! checks that [`SimStats`] tallies them exactly.

use pretty_assertions::assert_eq;
use rvpipe_core::sim::Observer;
use rvpipe_core::stats::SimStats;

use crate::common::TestContext;
use crate::common::builder::instruction::asm;

/// `x2 = 5 + 4 + 3 + 2 + 1` with a backward `bne`.
fn counted_loop() -> Vec<u32> {
    vec![
        asm().addi(1, 0, 5).build(),
        asm().add(2, 2, 1).build(),
        asm().addi(1, 1, -1).build(),
        asm().bne(1, 0, -8).build(),
    ]
}

/// One load-use stall, two MEM bypasses and two WB bypasses.
fn load_add_store() -> Vec<u32> {
    vec![
        asm().lui(4, 1).build(),
        asm().lw(5, 4, 0).build(),
        asm().add(6, 5, 5).build(),
        asm().sw(4, 6, 4).build(),
    ]
}

#[test]
fn fresh_stats_are_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.cpi(), 0.0);
}

#[test]
fn loop_mix_and_control_flushes() {
    let mut ctx = TestContext::new().load_program(&counted_loop());
    ctx.run_to_idle(200);
    assert_eq!(ctx.get_reg(2), 15);

    let stats = &ctx.sim.stats;
    assert_eq!(stats.instructions_retired, 16);
    assert_eq!(stats.inst_branch, 5);
    assert_eq!(stats.inst_alu, 11);
    assert_eq!(stats.inst_load, 0);
    assert_eq!(stats.inst_store, 0);
    assert_eq!(stats.inst_jump, 0);
    assert_eq!(stats.branches_taken, 4);
    assert_eq!(stats.control_flushes, 4);
    assert_eq!(stats.stalls_load_use, 0);
}

#[test]
fn load_use_and_forwarding_counts() {
    let mut ctx = TestContext::new().load_program(&load_add_store());
    ctx.poke_words(0x1000, &[21]);
    let cycles = ctx.run_to_idle(100);
    assert_eq!(ctx.peek_words(0x1004, 1), vec![42]);

    let stats = &ctx.sim.stats;
    assert_eq!(stats.cycles, cycles);
    assert_eq!(stats.instructions_retired, 4);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.stalls_load_use, 1);
    assert_eq!(stats.control_flushes, 0);
    assert_eq!(stats.forwards_mem, 2);
    assert_eq!(stats.forwards_wb, 2);
    assert_eq!(stats.forwards(), 4);
    assert_eq!(stats.cpi(), cycles as f64 / 4.0);
}

#[test]
fn jumps_are_counted_separately() {
    let program = [
        asm().jal(1, 8).build(),
        asm().addi(2, 0, 1).build(),
        asm().addi(3, 0, 1).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_idle(50);

    let stats = &ctx.sim.stats;
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.instructions_retired, 2);
    assert_eq!(stats.control_flushes, 1);
    assert_eq!(stats.branches_taken, 0);
}

#[test]
fn reset_cycles_count_time_but_not_work() {
    let mut ctx = TestContext::new().load_program(&counted_loop());
    ctx.cpu_mut().set_reset(true);
    ctx.run(3);
    assert_eq!(ctx.sim.stats.cycles, 3);
    assert_eq!(ctx.sim.stats.instructions_retired, 0);
    assert_eq!(ctx.sim.stats.control_flushes, 0);
}

#[test]
fn standalone_observer_matches_simulator_stats() {
    let mut ctx = TestContext::new().load_program(&load_add_store());
    let mut shadow = SimStats::default();
    for _ in 0..20 {
        shadow.on_cycle(&ctx.step());
    }
    assert_eq!(shadow.cycles, ctx.sim.stats.cycles);
    assert_eq!(shadow.instructions_retired, ctx.sim.stats.instructions_retired);
    assert_eq!(shadow.stalls_load_use, ctx.sim.stats.stalls_load_use);
}

#[test]
fn report_has_every_section() {
    let mut ctx = TestContext::new().load_program(&counted_loop());
    ctx.run_to_idle(200);
    let report = ctx.sim.stats.report();

    for heading in [
        "RV32I PIPELINE SIMULATION STATISTICS",
        "INSTRUCTION MIX",
        "HAZARDS",
        "sim_cycles",
        "sim_cpi",
        "stalls.load_use",
        "forwards.wb",
    ] {
        assert!(report.contains(heading), "report missing `{heading}`");
    }
    assert!(report.contains("sim_insts                16"));
}
