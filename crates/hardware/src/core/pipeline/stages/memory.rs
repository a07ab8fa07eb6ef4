//! Memory Access (MEM) Stage.
//!
//! Loads read data memory combinationally. Stores are returned as a request
//! so the core can commit them on the clock edge together with every other
//! piece of sequential state.

use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::core::pipeline::signals::MemWidth;
use crate::soc::DataMemory;

/// A store waiting for the clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StoreRequest {
    /// Effective byte address.
    pub addr: u32,
    /// Value whose low `width` bytes are written.
    pub data: u32,
    /// Access width.
    pub width: MemWidth,
}

/// Everything the memory stage produces in one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryOutput {
    /// Entry presented at the MEM/WB register input.
    pub mem_wb: MemWbEntry,
    /// Store to commit on the edge, if any.
    pub store: Option<StoreRequest>,
}

/// Executes the memory stage.
pub fn mem_stage(ex_mem: &ExMemEntry, dmem: &DataMemory) -> MemoryOutput {
    let ctrl = ex_mem.ctrl;
    let load_data = if ctrl.mem_read {
        let data = dmem.load(ex_mem.alu, ctrl.mem_size, ctrl.signed_load);
        tracing::trace!(pc = ex_mem.pc, addr = ex_mem.alu, data, "load");
        data
    } else {
        0
    };

    let store = ctrl.mem_write.then(|| {
        tracing::trace!(pc = ex_mem.pc, addr = ex_mem.alu, data = ex_mem.store_data, "store");
        StoreRequest {
            addr: ex_mem.alu,
            data: ex_mem.store_data,
            width: ctrl.mem_size,
        }
    });

    MemoryOutput {
        mem_wb: MemWbEntry {
            pc: ex_mem.pc,
            inst: ex_mem.inst,
            rd: ex_mem.rd,
            alu: ex_mem.alu,
            load_data,
            pc_plus4: ex_mem.pc_plus4,
            ctrl,
        },
        store,
    }
}
