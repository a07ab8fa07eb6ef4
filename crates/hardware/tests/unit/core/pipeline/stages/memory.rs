//! Memory Stage Tests.

use crate::common::builder::pipeline_state::ExMemBuilder;
use rvpipe_core::core::pipeline::signals::{ControlSignals, MemWidth, ResultSrc};
use rvpipe_core::core::pipeline::stages::{StoreRequest, mem_stage};
use rvpipe_core::soc::DataMemory;

fn load(width: MemWidth, signed: bool) -> ControlSignals {
    ControlSignals {
        reg_write: true,
        alu_src: true,
        mem_read: true,
        result_src: ResultSrc::Mem,
        mem_size: width,
        signed_load: signed,
        ..ControlSignals::default()
    }
}

#[test]
fn load_reads_memory() {
    let mut dmem = DataMemory::default();
    dmem.write_words(0x1000, &[0xDEAD_BEEF]);
    let ex_mem = ExMemBuilder::new()
        .alu_result(0x1000)
        .control(load(MemWidth::Word, true))
        .build();

    let out = mem_stage(&ex_mem, &dmem);
    assert_eq!(out.mem_wb.load_data, 0xDEAD_BEEF);
    assert_eq!(out.mem_wb.result(), 0xDEAD_BEEF);
    assert_eq!(out.store, None);
}

#[test]
fn signed_byte_load_extends() {
    let mut dmem = DataMemory::default();
    dmem.write_words(0x1000, &[0x0000_8000]);
    let ex_mem = ExMemBuilder::new()
        .alu_result(0x1001)
        .control(load(MemWidth::Byte, true))
        .build();
    assert_eq!(mem_stage(&ex_mem, &dmem).mem_wb.load_data, 0xFFFF_FF80);
}

#[test]
fn store_is_deferred_to_the_edge() {
    let dmem = DataMemory::default();
    let ex_mem = ExMemBuilder::new()
        .alu_result(0x1004)
        .store_data(30)
        .control(ControlSignals {
            alu_src: true,
            mem_write: true,
            mem_size: MemWidth::Word,
            ..ControlSignals::default()
        })
        .build();

    let out = mem_stage(&ex_mem, &dmem);
    assert_eq!(
        out.store,
        Some(StoreRequest {
            addr: 0x1004,
            data: 30,
            width: MemWidth::Word,
        })
    );
    assert_eq!(dmem.read_word(0x1004), 0);
}

#[test]
fn alu_result_passes_through() {
    let dmem = DataMemory::default();
    let ex_mem = ExMemBuilder::new()
        .pc(0x10)
        .rd(5)
        .alu_result(42)
        .control(ControlSignals {
            reg_write: true,
            ..ControlSignals::default()
        })
        .build();
    let out = mem_stage(&ex_mem, &dmem);
    assert_eq!(out.mem_wb.rd, 5);
    assert_eq!(out.mem_wb.result(), 42);
    assert_eq!(out.mem_wb.pc_plus4, 0x14);
}
