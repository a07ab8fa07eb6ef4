//! Host-side error definitions.
//!
//! The pipeline datapath itself never fails: unknown encodings, out-of-range
//! addresses and misaligned accesses all have deterministic outcomes. Errors
//! only arise at the boundary with the host, when reading program images or
//! configuration files.

use std::path::PathBuf;

/// Errors raised while preparing or driving a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A program image line is not valid hexadecimal.
    #[error("line {line}: cannot parse `{text}` as hex")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// Offending token.
        text: String,
    },

    /// The program does not fit in instruction memory.
    #[error("program has {words} words but instruction memory holds {capacity}")]
    ProgramTooLarge {
        /// Number of words in the program.
        words: usize,
        /// Instruction memory capacity in words.
        capacity: usize,
    },

    /// A configuration document is malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias used by the loader, configuration and simulator front end.
pub type Result<T> = std::result::Result<T, SimError>;
