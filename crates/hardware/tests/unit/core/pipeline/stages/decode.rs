//! Decode Stage Tests.

use crate::common::builder::instruction::asm;
use crate::common::builder::pipeline_state::IfIdBuilder;
use rvpipe_core::core::arch::gpr::{RegisterFile, WritePort};
use rvpipe_core::core::pipeline::signals::AluOp;
use rvpipe_core::core::pipeline::stages::decode_stage;

fn regs() -> RegisterFile {
    let mut regs = RegisterFile::new();
    regs.write(1, 10);
    regs.write(2, 20);
    regs
}

#[test]
fn reads_operands_and_fields() {
    let if_id = IfIdBuilder::new()
        .pc(0x0C)
        .inst(asm().sub(3, 1, 2).build())
        .build();
    let out = decode_stage(&if_id, &regs(), WritePort::default());

    assert_eq!((out.rs1, out.rs2, out.rd), (1, 2, 3));
    assert_eq!((out.rv1, out.rv2), (10, 20));
    assert_eq!(out.pc, 0x0C);
    assert_eq!(out.ctrl.alu_op, AluOp::Sub);
}

#[test]
fn write_through_covers_same_cycle_writeback() {
    let if_id = IfIdBuilder::new()
        .inst(asm().add(3, 1, 2).build())
        .build();
    let wb = WritePort {
        enable: true,
        rd: 2,
        data: 99,
    };
    let out = decode_stage(&if_id, &regs(), wb);
    assert_eq!(out.rv1, 10);
    assert_eq!(out.rv2, 99);
}

#[test]
fn branch_target_is_pc_plus_immediate() {
    let if_id = IfIdBuilder::new()
        .pc(0x24)
        .inst(asm().beq(3, 0, 0x20).build())
        .build();
    let out = decode_stage(&if_id, &regs(), WritePort::default());
    assert_eq!(out.imm, 0x20);
    assert_eq!(out.branch_target, 0x44);
}

#[test]
fn backward_jal_target() {
    let if_id = IfIdBuilder::new()
        .pc(0x40)
        .inst(asm().jal(0, -0x1C).build())
        .build();
    let out = decode_stage(&if_id, &regs(), WritePort::default());
    assert_eq!(out.branch_target, 0x24);
    assert!(out.ctrl.jump);
}

#[test]
fn unused_source_fields_latch_as_x0() {
    // addi x5, x1, 2 carries 2 in the rs2 position
    let addi = IfIdBuilder::new().inst(asm().addi(5, 1, 2).build()).build();
    let out = decode_stage(&addi, &regs(), WritePort::default());
    assert_eq!((out.rs1, out.rs2), (1, 0));
    assert_eq!(out.rv1, 10);

    let lui = IfIdBuilder::new().inst(asm().lui(5, 0xFFFFF).build()).build();
    let out = decode_stage(&lui, &regs(), WritePort::default());
    assert_eq!((out.rs1, out.rs2), (0, 0));
}
