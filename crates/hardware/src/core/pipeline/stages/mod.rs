//! Pipeline stage implementations.
//!
//! Each stage is a combinational function from the outputs of the register
//! in front of it to the value presented at the register behind it. None of
//! them mutates state; the core collects their outputs and commits
//! everything on the clock edge.
//! 1. **Fetch:** Reads the instruction at the current PC.
//! 2. **Decode:** Generates control signals and reads operands.
//! 3. **Execute:** Performs the ALU operation and resolves branches and jumps.
//! 4. **Memory:** Performs loads and prepares stores.
//! 5. **Writeback:** Selects the result and drives the register file write port.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::{ExecuteOutput, execute_stage};
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::{MemoryOutput, StoreRequest, mem_stage};
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
