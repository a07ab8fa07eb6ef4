//! Pipeline Wiring Tests.
//!
//! Drives short programs a cycle at a time and checks the observed hazard,
//! forwarding and redirect signals against the expected timing.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::TestContext;
use crate::common::builder::instruction::asm;
use rvpipe_core::core::pipeline::forwarding::ForwardSel;
use rvpipe_core::core::pipeline::traits::PipelineLatch;

#[test]
fn first_cycles_fill_the_pipeline() {
    let program = [
        asm().addi(1, 0, 1).build(),
        asm().addi(2, 0, 2).build(),
        asm().addi(3, 0, 3).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);

    let pcs: Vec<u32> = ctx.trace(3).iter().map(|s| s.pc).collect();
    assert_eq!(pcs, vec![0, 4, 8]);
    assert_eq!(ctx.cpu().pc(), 12);
    assert_eq!(ctx.cpu().latches().id_ex.inst, program[1]);
    assert_eq!(ctx.cpu().latches().ex_mem.inst, program[0]);
}

#[test]
fn first_result_is_written_after_five_cycles() {
    let mut ctx = TestContext::new().load_program(&[asm().addi(1, 0, 42).build()]);
    ctx.run(4);
    assert_eq!(ctx.get_reg(1), 0);
    ctx.run(1);
    assert_eq!(ctx.get_reg(1), 42);
}

#[test]
fn back_to_back_dependence_forwards_from_mem() {
    let program = [asm().addi(1, 0, 5).build(), asm().add(2, 1, 1).build()];
    let mut ctx = TestContext::new().load_program(&program);

    let snaps = ctx.trace(4);
    // cycle 4: add in EX, addi in MEM
    assert_eq!(snaps[3].forwarding.forward_a, ForwardSel::FromMem);
    assert_eq!(snaps[3].forwarding.forward_b, ForwardSel::FromMem);
    assert_eq!(snaps[3].alu.result, 10);
}

#[test]
fn distance_two_dependence_forwards_from_wb() {
    let program = [
        asm().addi(1, 0, 5).build(),
        asm().nop().build(),
        asm().addi(2, 1, 1).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);

    let snaps = ctx.trace(5);
    assert_eq!(snaps[4].forwarding.forward_a, ForwardSel::FromWb);
    assert_eq!(snaps[4].alu.result, 6);
}

#[test]
fn distance_three_dependence_uses_write_through() {
    let program = [
        asm().addi(1, 0, 5).build(),
        asm().nop().build(),
        asm().nop().build(),
        asm().addi(2, 1, 1).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_idle(50);
    assert_eq!(ctx.get_reg(2), 6);
}

#[test]
fn load_use_inserts_one_bubble() {
    let program = [
        asm().lui(4, 1).build(),
        asm().lw(5, 4, 0).build(),
        asm().add(6, 5, 5).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.poke_words(0x1000, &[21]);

    let snaps = ctx.trace(4);
    // cycle 4: lw in EX, add in ID
    let stall = snaps[3];
    assert!(stall.hazards.is_load_use_stall());
    assert!(stall.hazards.flush_ex);
    assert_eq!(stall.pc, 12);
    assert_eq!(ctx.cpu().pc(), 12, "PC held");
    assert_eq!(ctx.cpu().latches().if_id.inst, program[2], "IF/ID held");
    assert!(ctx.cpu().latches().id_ex.is_bubble(), "bubble sent into EX");

    // cycle 6: add in EX, lw in WB
    let snaps = ctx.trace(2);
    assert_eq!(snaps[1].forwarding.forward_a, ForwardSel::FromWb);
    assert_eq!(snaps[1].alu.result, 42);

    ctx.run_to_idle(50);
    assert_eq!(ctx.get_reg(6), 42);
    assert_eq!(ctx.sim.stats.stalls_load_use, 1);
}

/// Immediate and shift-amount bits in the source fields are not register reads.
#[rstest]
#[case::addi(asm().addi(2, 0, 1).build())]
#[case::slli(asm().slli(2, 0, 1).build())]
#[case::lui(asm().lui(3, 8).build())]
#[case::auipc(asm().auipc(3, 8).build())]
fn immediate_bits_never_stall_or_forward(#[case] follower: u32) {
    let program = [asm().lw(1, 4, 0).build(), follower];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.set_reg(4, 0x1000);
    ctx.poke_words(0x1000, &[7]);

    assert_eq!(ctx.run_to_idle(50), 6);
    assert_eq!(ctx.get_reg(1), 7);
    assert_eq!(ctx.sim.stats.stalls_load_use, 0);
    assert_eq!(ctx.sim.stats.forwards(), 0);
}

#[test]
fn load_to_x0_never_stalls() {
    let program = [
        asm().lui(4, 1).build(),
        asm().lw(0, 4, 0).build(),
        asm().add(6, 0, 0).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let snaps = ctx.trace(6);
    assert!(snaps.iter().all(|s| !s.hazards.is_load_use_stall()));
}

#[test]
fn taken_branch_discards_two_younger_instructions() {
    let program = [
        asm().beq(0, 0, 12).build(),
        asm().addi(1, 0, 1).build(),
        asm().addi(2, 0, 2).build(),
        asm().addi(3, 0, 3).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);

    let snaps = ctx.trace(3);
    // cycle 3: beq in EX
    assert!(snaps[2].branch_taken);
    assert_eq!(snaps[2].redirect, Some(12));
    assert!(snaps[2].hazards.is_control_flush());
    assert_eq!(ctx.cpu().pc(), 12);
    assert!(ctx.cpu().latches().if_id.is_bubble());
    assert!(ctx.cpu().latches().id_ex.is_bubble());

    ctx.run_to_idle(50);
    assert_eq!((ctx.get_reg(1), ctx.get_reg(2), ctx.get_reg(3)), (0, 0, 3));
}

#[test]
fn untaken_branch_costs_nothing() {
    let program = [
        asm().bne(0, 0, 12).build(),
        asm().addi(1, 0, 1).build(),
        asm().addi(2, 0, 2).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let snaps = ctx.trace(3);
    assert!(!snaps[2].branch_taken);
    assert!(!snaps[2].hazards.is_control_flush());

    ctx.run_to_idle(50);
    assert_eq!((ctx.get_reg(1), ctx.get_reg(2)), (1, 2));
}

#[test]
fn jal_links_and_skips() {
    let program = [
        asm().jal(1, 8).build(),
        asm().addi(2, 0, 2).build(),
        asm().addi(3, 0, 3).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_idle(50);
    assert_eq!(ctx.get_reg(1), 4);
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 3);
}

#[test]
fn jalr_returns_through_link_register() {
    // 0x00: jal  ra, 12      -> 0x0C
    // 0x04: addi a0, a0, 100
    // 0x08: jal  x0, 12      -> 0x14
    // 0x0C: addi a0, zero, 1
    // 0x10: jalr x0, 0(ra)   -> 0x04
    // 0x14: nop
    let program = [
        asm().jal(1, 12).build(),
        asm().addi(10, 10, 100).build(),
        asm().jal(0, 12).build(),
        asm().addi(10, 0, 1).build(),
        asm().jalr(0, 1, 0).build(),
        asm().nop().build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_idle(100);
    assert_eq!(ctx.get_reg(1), 4);
    assert_eq!(ctx.get_reg(10), 101);
}

#[test]
fn debug_ports_report_current_fetch() {
    let program = [asm().addi(1, 0, 1).build(), asm().addi(2, 0, 2).build()];
    let mut ctx = TestContext::new().load_program(&program);
    assert_eq!(ctx.cpu().current_instruction(), program[0]);
    ctx.run(1);
    assert_eq!(ctx.cpu().pc(), 4);
    assert_eq!(ctx.cpu().current_instruction(), program[1]);
    assert_eq!(ctx.cpu().cycle(), 1);
}
