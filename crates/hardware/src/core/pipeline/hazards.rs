//! Hazard Detection Unit.
//!
//! Combinational logic that keeps the pipeline consistent when instructions
//! overlap. Three rules are evaluated independently and OR-ed together:
//! 1. **Load-use:** a load in EX whose destination feeds a source of the
//!    instruction in ID stalls IF and ID for one cycle and bubbles EX.
//! 2. **Taken branch:** a branch resolved taken in EX discards the two younger
//!    instructions by flushing IF, ID and EX.
//! 3. **Jump:** a jump flushes IF, ID and EX likewise.
//!
//! Flushes never clear a load-use stall; the stall outputs stay asserted
//! whenever the load-use rule fires.
//!
//! Register dependence is decided by [`depends_on`], which is shared with the
//! forwarding unit so the `x0` exclusion lives in exactly one place.

use serde::Serialize;

use crate::isa::abi::REG_ZERO;

/// True if an instruction writing `dest` (with `reg_write`) produces a value
/// that a reader of `src` must observe.
///
/// `x0` never produces a dependence, whatever the addresses say.
#[inline]
pub const fn depends_on(dest: usize, reg_write: bool, src: usize) -> bool {
    reg_write && dest != REG_ZERO && dest == src
}

/// Observed state the hazard unit decides on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HazardInputs {
    /// First source register read by the instruction in ID (`x0` if unused).
    pub id_rs1: usize,
    /// Second source register read by the instruction in ID (`x0` if unused).
    pub id_rs2: usize,
    /// Destination register of the instruction in EX.
    pub ex_rd: usize,
    /// The instruction in EX is a load.
    pub ex_mem_read: bool,
    /// The instruction in EX writes a register.
    pub ex_reg_write: bool,
    /// The instruction in EX is a conditional branch. Branches only redirect
    /// once resolved, so this input does not by itself flush anything.
    pub ex_branch: bool,
    /// The instruction in EX is a jump, taken from the ID/EX register so the
    /// jump itself survives the flush and writes its link register.
    pub ex_jump: bool,
    /// A conditional branch resolved taken in EX.
    pub ex_branch_taken: bool,
}

/// Stall and flush outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct HazardSignals {
    /// Hold the program counter.
    pub stall_if: bool,
    /// Hold the IF/ID register.
    pub stall_id: bool,
    /// Discard the instruction being fetched.
    pub flush_if: bool,
    /// Discard the instruction being decoded.
    pub flush_id: bool,
    /// Send a bubble into EX.
    pub flush_ex: bool,
}

impl HazardSignals {
    /// True if the load-use rule fired this cycle.
    pub const fn is_load_use_stall(&self) -> bool {
        self.stall_if && self.stall_id
    }

    /// True if a control hazard flushed the front end this cycle.
    pub const fn is_control_flush(&self) -> bool {
        self.flush_if && self.flush_id
    }
}

/// Stateless hazard detection unit.
#[derive(Debug)]
pub struct HazardUnit;

impl HazardUnit {
    /// Checks for a load-use data hazard between EX and ID.
    pub const fn load_use(inputs: &HazardInputs) -> bool {
        let ex_load_writes = inputs.ex_mem_read && inputs.ex_reg_write;
        depends_on(inputs.ex_rd, ex_load_writes, inputs.id_rs1)
            || depends_on(inputs.ex_rd, ex_load_writes, inputs.id_rs2)
    }

    /// Checks for a control hazard (taken branch or jump).
    pub const fn control(inputs: &HazardInputs) -> bool {
        inputs.ex_branch_taken || inputs.ex_jump
    }

    /// Computes the stall and flush signals for one cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::pipeline::hazards::{HazardInputs, HazardUnit};
    ///
    /// // lw x5, 0(x1) in EX; add x6, x5, x7 in ID
    /// let sig = HazardUnit::detect(&HazardInputs {
    ///     id_rs1: 5,
    ///     id_rs2: 7,
    ///     ex_rd: 5,
    ///     ex_mem_read: true,
    ///     ex_reg_write: true,
    ///     ..Default::default()
    /// });
    /// assert!(sig.stall_if && sig.stall_id && sig.flush_ex);
    /// assert!(!sig.flush_if && !sig.flush_id);
    /// ```
    pub const fn detect(inputs: &HazardInputs) -> HazardSignals {
        let load_use = Self::load_use(inputs);
        let control = Self::control(inputs);

        HazardSignals {
            stall_if: load_use,
            stall_id: load_use,
            flush_if: control,
            flush_id: control,
            flush_ex: load_use || control,
        }
    }
}
