//! Hex Program Loader.
//!
//! This module turns textual program images into instruction words. It accepts:
//! 1. **Word images:** 32-bit hexadecimal words, normally one per line (`0x`
//!    prefix and `_` separators allowed), as written by `$readmemh`-style tooling.
//! 2. **Byte images:** `objcopy -O verilog` lines of whitespace-separated bytes,
//!    grouped little-endian into words.
//! 3. **Noise:** Blank lines, `#` and `//` comments, and `@address` markers,
//!    which are skipped. Programs are always placed at address 0.
//!
//! The format is decided once for the whole image, never per line, so words
//! always come out in file order.

use std::path::Path;

use crate::common::error::{Result, SimError};

/// A data line: 1-based line number and its tokens.
type Line<'a> = (usize, Vec<&'a str>);

/// Parses a program image.
///
/// The image is a byte stream when every token is at most two hex digits and
/// at least one line carries several of them; otherwise every token is a
/// whole word, so `13` on its own line is the NOP word. A trailing partial
/// word from a byte stream is zero-padded.
///
/// # Errors
///
/// Returns `SimError::Parse` with the 1-based line number for any token that
/// is not valid hexadecimal, or for a line of bytes inside a word image.
///
/// # Examples
///
/// ```
/// use rvpipe_core::sim::loader::parse_hex;
///
/// let words = parse_hex("@0\n00a00093 # addi ra, zero, 10\n13\n").unwrap();
/// assert_eq!(words, vec![0x00a0_0093, 0x0000_0013]);
///
/// let bytes = parse_hex("@0\n93 00 a0 00\n13 00 00 00\n").unwrap();
/// assert_eq!(bytes, words);
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u32>> {
    let lines: Vec<Line<'_>> = text
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = strip_comment(raw).trim();
            (!line.is_empty() && !line.starts_with('@'))
                .then(|| (idx + 1, line.split_whitespace().collect()))
        })
        .collect();

    let byte_image = lines.iter().any(|(_, tokens)| tokens.len() > 1)
        && lines.iter().all(|(_, tokens)| is_byte_line(tokens));

    if byte_image {
        parse_bytes(&lines).map(|bytes| pack_words(&bytes))
    } else {
        parse_words(&lines)
    }
}

fn is_byte_line(tokens: &[&str]) -> bool {
    tokens.iter().all(|t| t.len() <= 2)
}

fn parse_words(lines: &[Line<'_>]) -> Result<Vec<u32>> {
    let mut words = Vec::with_capacity(lines.len());
    for (line, tokens) in lines {
        if tokens.len() > 1 && is_byte_line(tokens) {
            return Err(SimError::Parse {
                line: *line,
                text: tokens.join(" "),
            });
        }
        for token in tokens {
            words.push(parse_token(*line, token)?);
        }
    }
    Ok(words)
}

fn parse_bytes(lines: &[Line<'_>]) -> Result<Vec<u8>> {
    lines
        .iter()
        .flat_map(|(line, tokens)| {
            tokens
                .iter()
                .map(move |token| parse_token(*line, token).map(|v| v as u8))
        })
        .collect()
}

fn pack_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}

/// Reads and parses a program image from disk.
///
/// # Errors
///
/// Returns `SimError::Io` if the file cannot be read, or `SimError::Parse`
/// for malformed contents.
pub fn load_hex_file(path: impl AsRef<Path>) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_hex(&text)?;
    tracing::info!(path = %path.display(), words = words.len(), "parsed program image");
    Ok(words)
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

fn parse_token(line: usize, token: &str) -> Result<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
        .replace('_', "");
    let value = if digits.is_empty() || digits.len() > 8 {
        None
    } else {
        u32::from_str_radix(&digits, 16).ok()
    };
    value.ok_or_else(|| SimError::Parse {
        line,
        text: token.to_string(),
    })
}
