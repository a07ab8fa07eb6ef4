//! Instruction pipeline implementation.
//!
//! This module contains the five-stage in-order pipeline. It includes:
//! 1. **Signals:** Control signals generated during instruction decoding.
//! 2. **Latches:** Inter-stage entries and the generic stallable/flushable register.
//! 3. **Hazards:** Load-use stall and control-flush detection.
//! 4. **Forwarding:** EX operand bypass selection and the ID-stage write-through.
//! 5. **Stages:** Fetch, Decode, Execute, Memory, and Writeback combinational logic.
//! 6. **Traits:** The latch payload interface.

/// Operand forwarding (bypass) selection.
pub mod forwarding;

/// Pipeline hazard detection logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latch payloads.
pub mod traits;
