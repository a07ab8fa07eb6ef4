//! Configuration system for the pipeline model.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation. It provides:
//! 1. **Defaults:** Baseline reset address, memory geometry and run limits.
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Enums:** The program counter's address unit.
//!
//! Configuration is supplied as JSON (every field optional) or built with `Config::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_DMEM_BASE, DEFAULT_DMEM_SIZE, DEFAULT_IMEM_WORDS};
use crate::common::error::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    /// Address the program counter holds while reset is asserted.
    pub const RESET_PC: u32 = 0;

    /// Upper bound on cycles for runs that wait for the pipeline to drain.
    pub const MAX_CYCLES: u64 = 100_000;
}

/// Unit in which the program counter stores and steps addresses.
///
/// The same unit applies to the reset address, the stored value, the
/// sequential step, and any branch target presented to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum AddressUnit {
    /// Byte addresses; sequential fetch advances by 4.
    #[default]
    Byte,
    /// Word indices; sequential fetch advances by 1.
    Word,
}

impl AddressUnit {
    /// Increment applied on a sequential (non-stalled, non-branching) edge.
    pub const fn step(self) -> u32 {
        match self {
            Self::Byte => 4,
            Self::Word => 1,
        }
    }

    /// Converts a byte address into this unit.
    pub const fn from_byte_addr(self, addr: u32) -> u32 {
        match self {
            Self::Byte => addr,
            Self::Word => addr >> 2,
        }
    }

    /// Converts a value expressed in this unit back to a byte address.
    pub const fn to_byte_addr(self, value: u32) -> u32 {
        match self {
            Self::Byte => value,
            Self::Word => value << 2,
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::{AddressUnit, Config};
///
/// let json = r#"{
///     "general": { "reset_pc": 0, "trace_instructions": true },
///     "memory": { "dmem_base": 4096, "dmem_size": 8192 },
///     "pipeline": { "pc_unit": "Word" }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.dmem_size, 8192);
/// assert_eq!(config.memory.imem_words, 1024);
/// assert_eq!(config.pipeline.pc_unit, AddressUnit::Word);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory geometry
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline parameters
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the document is malformed or has fields
    /// of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` if the file cannot be read, or
    /// `SimError::Config` if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a per-stage `trace` event for every cycle.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Byte address fetched first after reset.
    #[serde(default = "GeneralConfig::default_reset_pc")]
    pub reset_pc: u32,

    /// Cycle limit for runs that wait for the pipeline to go idle.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    const fn default_reset_pc() -> u32 {
        defaults::RESET_PC
    }

    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            reset_pc: defaults::RESET_PC,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Instruction and data memory geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory capacity in 32-bit words.
    #[serde(default = "MemoryConfig::default_imem_words")]
    pub imem_words: usize,

    /// First byte address served by data memory.
    #[serde(default = "MemoryConfig::default_dmem_base")]
    pub dmem_base: u32,

    /// Data memory size in bytes.
    #[serde(default = "MemoryConfig::default_dmem_size")]
    pub dmem_size: usize,
}

impl MemoryConfig {
    const fn default_imem_words() -> usize {
        DEFAULT_IMEM_WORDS
    }

    const fn default_dmem_base() -> u32 {
        DEFAULT_DMEM_BASE
    }

    const fn default_dmem_size() -> usize {
        DEFAULT_DMEM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_words: DEFAULT_IMEM_WORDS,
            dmem_base: DEFAULT_DMEM_BASE,
            dmem_size: DEFAULT_DMEM_SIZE,
        }
    }
}

/// Pipeline parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    /// Unit used by the program counter for its stored value and step.
    #[serde(default)]
    pub pc_unit: AddressUnit,
}
