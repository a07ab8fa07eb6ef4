//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I base encodings, field extraction, immediate decoding and
//! a small disassembler used by trace output and the command-line front end.
//!
//! # Layout
//!
//! * `rv32i`: opcode and function-code constants for the base integer set.
//! * `instruction`: positional field extraction from a raw word.
//! * `decode`: format classification and immediate sign/zero extension.
//! * `abi`: register naming.
//! * `disasm`: mnemonic rendering.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for the RV32I instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
