//! Pipeline Latch Interface.
//!
//! Every inter-stage entry type knows its own NOP-equivalent and can tell
//! whether it is currently carrying one. The generic `PipelineRegister`
//! relies on this to implement flush and reset identically for all four
//! registers.

/// Represents the payload of a pipeline register.
pub trait PipelineLatch: Clone {
    /// The NOP-equivalent entry loaded on flush and reset.
    ///
    /// All control signals are false; instruction fields hold the canonical
    /// NOP so traces read as `addi x0, x0, 0`.
    fn bubble() -> Self;

    /// Checks if the entry has no architectural effect.
    fn is_bubble(&self) -> bool;
}
