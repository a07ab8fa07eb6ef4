//! RISC-V General-Purpose Register File.
//!
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` reads as zero and ignores writes.
//! 3. **Port Ordering:** Reads are combinational against the committed state;
//!    the single write port commits on the clock edge, so a read in the same
//!    cycle as a write to the same register observes the old value.
//! 4. **Debugging:** Utilities for dumping the complete register state.

use crate::common::constants::NUM_REGISTERS;
use crate::isa::abi;

/// Write port request sampled on the clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct WritePort {
    /// Write enable (`reg_write` from MEM/WB).
    pub enable: bool,
    /// Destination register index.
    pub rd: usize,
    /// Value to commit.
    pub data: u32,
}

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// Register `x0` and out-of-range indices return 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == abi::REG_ZERO {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes a value to a general-purpose register immediately.
    ///
    /// Writes to `x0` or out-of-range indices are discarded. Used for test
    /// setup and by `clock`.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx == abi::REG_ZERO {
            return;
        }
        if let Some(slot) = self.regs.get_mut(idx) {
            *slot = val;
        }
    }

    /// Applies the write port on a rising clock edge.
    pub fn clock(&mut self, port: WritePort) {
        if port.enable {
            self.write(port.rd, port.data);
        }
    }

    /// Clears every register to zero.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Returns a copy of all 32 register values; index 0 is always zero.
    pub fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        self.regs
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            println!(
                "x{:<2} {:>4}={:#010x}  x{:<2} {:>4}={:#010x}",
                i,
                abi::reg_name(i),
                self.regs[i],
                i + 1,
                abi::reg_name(i + 1),
                self.regs[i + 1]
            );
        }
    }
}
