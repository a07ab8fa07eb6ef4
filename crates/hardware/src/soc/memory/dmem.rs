//! Data Memory.
//!
//! Byte storage mapped at a configurable base address and reached through a
//! 32-bit word port with per-byte write enables. Sub-word accesses select
//! their byte lanes from the low address bits:
//! 1. **Byte:** lane `addr & 3`.
//! 2. **Half:** lanes `addr & 2` and `(addr & 2) + 1`.
//! 3. **Word:** all four lanes; the low two bits are ignored.
//!
//! Misaligned halfword and word accesses are therefore aligned down to the
//! containing half or word. Lanes outside the mapped range read as zero and
//! ignore writes.

use crate::common::constants::{DEFAULT_DMEM_BASE, DEFAULT_DMEM_SIZE, WORD_OFFSET_MASK};
use crate::core::pipeline::signals::MemWidth;

/// All four byte enables.
pub const BYTE_ENABLE_WORD: u8 = 0b1111;

/// Byte-addressable data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    bytes: Vec<u8>,
    base: u32,
}

impl DataMemory {
    /// Creates a zero-filled memory of `size` bytes mapped at `base`.
    pub fn new(base: u32, size: usize) -> Self {
        Self {
            bytes: vec![0; size],
            base,
        }
    }

    /// First mapped byte address.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Index of `addr` in the backing store, if mapped.
    fn index(&self, addr: u32) -> Option<usize> {
        let offset = addr.checked_sub(self.base)? as usize;
        (offset < self.bytes.len()).then_some(offset)
    }

    /// True if the whole word containing `addr` is mapped.
    pub fn contains(&self, addr: u32) -> bool {
        let word = addr & !WORD_OFFSET_MASK;
        self.index(word).is_some() && self.index(word.wrapping_add(3)).is_some()
    }

    /// Reads the word containing `addr` (little-endian).
    pub fn read_word(&self, addr: u32) -> u32 {
        let word = addr & !WORD_OFFSET_MASK;
        if !self.contains(word) {
            tracing::debug!("data read outside memory at {addr:#010x}");
        }
        (0..4).fold(0, |acc, lane| {
            let byte = self
                .index(word.wrapping_add(lane))
                .map_or(0, |i| self.bytes[i]);
            acc | (u32::from(byte) << (lane * 8))
        })
    }

    /// Writes the lanes of `data` selected by `byte_enable` into the word containing `addr`.
    pub fn write_word(&mut self, addr: u32, data: u32, byte_enable: u8) {
        let word = addr & !WORD_OFFSET_MASK;
        if !self.contains(word) {
            tracing::debug!("data write outside memory at {addr:#010x} dropped");
        }
        for lane in 0..4u32 {
            if byte_enable & (1 << lane) == 0 {
                continue;
            }
            if let Some(i) = self.index(word.wrapping_add(lane)) {
                self.bytes[i] = (data >> (lane * 8)) as u8;
            }
        }
    }

    /// Byte enables and lane shift for an access of `width` at `addr`.
    pub const fn lanes(addr: u32, width: MemWidth) -> (u8, u32) {
        match width {
            MemWidth::Byte => {
                let lane = addr & 3;
                (1 << lane, lane * 8)
            }
            MemWidth::Half => {
                let lane = addr & 2;
                (0b11 << lane, lane * 8)
            }
            MemWidth::Word => (BYTE_ENABLE_WORD, 0),
        }
    }

    /// Performs a load of `width` at `addr`, sign- or zero-extending to 32 bits.
    pub fn load(&self, addr: u32, width: MemWidth, signed: bool) -> u32 {
        let (_, shift) = Self::lanes(addr, width);
        let raw = self.read_word(addr) >> shift;
        match (width, signed) {
            (MemWidth::Byte, true) => raw as u8 as i8 as i32 as u32,
            (MemWidth::Byte, false) => raw & 0xFF,
            (MemWidth::Half, true) => raw as u16 as i16 as i32 as u32,
            (MemWidth::Half, false) => raw & 0xFFFF,
            (MemWidth::Word, _) => raw,
        }
    }

    /// Performs a store of the low `width` bytes of `value` at `addr`.
    pub fn store(&mut self, addr: u32, value: u32, width: MemWidth) {
        let (byte_enable, shift) = Self::lanes(addr, width);
        self.write_word(addr, value << shift, byte_enable);
    }

    /// Writes consecutive words starting at `addr`. Used to preload data.
    pub fn write_words(&mut self, addr: u32, words: &[u32]) {
        for (i, &w) in words.iter().enumerate() {
            self.write_word(addr.wrapping_add((i as u32) << 2), w, BYTE_ENABLE_WORD);
        }
    }

    /// Reads `count` consecutive words starting at `addr`.
    pub fn dump(&self, addr: u32, count: usize) -> Vec<u32> {
        (0..count)
            .map(|i| self.read_word(addr.wrapping_add((i as u32) << 2)))
            .collect()
    }

    /// Zeroes the whole memory.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new(DEFAULT_DMEM_BASE, DEFAULT_DMEM_SIZE)
    }
}
