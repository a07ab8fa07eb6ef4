//! Program Counter.
//!
//! The program counter is the only sequential element outside the pipeline
//! registers that the front end owns. On each rising edge it resolves, in
//! order:
//! 1. **Stall:** hold the current value.
//! 2. **Branch:** load the presented target.
//! 3. **Sequential:** advance by one instruction in the configured unit.
//!
//! Arithmetic wraps modulo 2^32.

use crate::config::AddressUnit;

/// Next-address inputs sampled on the clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcInputs {
    /// Hold the current address.
    pub stall: bool,
    /// Redirect to `branch_target`.
    pub branch_taken: bool,
    /// Redirect target, expressed in the counter's address unit.
    pub branch_target: u32,
}

/// Program counter state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramCounter {
    value: u32,
    reset_value: u32,
    unit: AddressUnit,
}

impl ProgramCounter {
    /// Creates a counter sitting at its reset value.
    ///
    /// `reset_value` is expressed in `unit`; in `Byte` mode it is forced to
    /// a 4-byte boundary.
    pub const fn new(reset_value: u32, unit: AddressUnit) -> Self {
        let reset_value = match unit {
            AddressUnit::Byte => reset_value & !3,
            AddressUnit::Word => reset_value,
        };
        Self {
            value: reset_value,
            reset_value,
            unit,
        }
    }

    /// Current value in the counter's unit.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Current fetch address in bytes.
    pub const fn byte_address(&self) -> u32 {
        self.unit.to_byte_addr(self.value)
    }

    /// Unit the counter stores and steps in.
    pub const fn unit(&self) -> AddressUnit {
        self.unit
    }

    /// Returns the counter to its reset value.
    pub const fn reset(&mut self) {
        self.value = self.reset_value;
    }

    /// Computes the value the counter would take on the next edge.
    pub const fn next(&self, inputs: PcInputs) -> u32 {
        if inputs.stall {
            self.value
        } else if inputs.branch_taken {
            inputs.branch_target
        } else {
            self.value.wrapping_add(self.unit.step())
        }
    }

    /// Applies one rising clock edge.
    pub const fn tick(&mut self, inputs: PcInputs) {
        self.value = self.next(inputs);
    }
}
