//! Data Memory Tests.
//!
//! Byte-lane selection, extension, and out-of-range behaviour.

use rstest::rstest;
use rvpipe_core::core::pipeline::signals::MemWidth;
use rvpipe_core::soc::DataMemory;
use rvpipe_core::soc::memory::dmem::BYTE_ENABLE_WORD;

const BASE: u32 = 0x1000;

fn mem() -> DataMemory {
    let mut dmem = DataMemory::new(BASE, 64);
    dmem.write_words(BASE, &[0x8899_AABB, 0x1122_3344]);
    dmem
}

#[test]
fn defaults() {
    let dmem = DataMemory::default();
    assert_eq!(dmem.base(), 0x1000);
    assert_eq!(dmem.size(), 4096);
}

#[rstest]
#[case(BASE, MemWidth::Byte, 0b0001, 0)]
#[case(BASE + 1, MemWidth::Byte, 0b0010, 8)]
#[case(BASE + 3, MemWidth::Byte, 0b1000, 24)]
#[case(BASE, MemWidth::Half, 0b0011, 0)]
#[case(BASE + 2, MemWidth::Half, 0b1100, 16)]
#[case(BASE + 3, MemWidth::Half, 0b1100, 16)]
#[case(BASE + 1, MemWidth::Word, 0b1111, 0)]
fn lane_selection(
    #[case] addr: u32,
    #[case] width: MemWidth,
    #[case] enables: u8,
    #[case] shift: u32,
) {
    assert_eq!(DataMemory::lanes(addr, width), (enables, shift));
}

#[rstest]
#[case(BASE, MemWidth::Byte, true, 0xFFFF_FFBB)]
#[case(BASE, MemWidth::Byte, false, 0xBB)]
#[case(BASE + 2, MemWidth::Half, true, 0xFFFF_8899)]
#[case(BASE + 2, MemWidth::Half, false, 0x8899)]
#[case(BASE + 4, MemWidth::Byte, true, 0x44)]
#[case(BASE + 6, MemWidth::Half, true, 0x1122)]
#[case(BASE, MemWidth::Word, true, 0x8899_AABB)]
fn loads_extend(
    #[case] addr: u32,
    #[case] width: MemWidth,
    #[case] signed: bool,
    #[case] expected: u32,
) {
    assert_eq!(mem().load(addr, width, signed), expected);
}

#[test]
fn byte_store_touches_one_lane() {
    let mut dmem = mem();
    dmem.store(BASE + 2, 0xFFFF_FF00, MemWidth::Byte);
    assert_eq!(dmem.read_word(BASE), 0x8800_AABB);
}

#[test]
fn half_store_touches_two_lanes() {
    let mut dmem = mem();
    dmem.store(BASE + 4, 0xCAFE_BEEF, MemWidth::Half);
    assert_eq!(dmem.read_word(BASE + 4), 0x1122_BEEF);
}

#[test]
fn misaligned_word_is_aligned_down() {
    let mut dmem = mem();
    dmem.store(BASE + 5, 0xDEAD_BEEF, MemWidth::Word);
    assert_eq!(dmem.read_word(BASE + 4), 0xDEAD_BEEF);
    assert_eq!(dmem.load(BASE + 7, MemWidth::Word, false), 0xDEAD_BEEF);
}

#[test]
fn byte_enables_are_honoured() {
    let mut dmem = mem();
    dmem.write_word(BASE, 0, 0b0101);
    assert_eq!(dmem.read_word(BASE), 0x8800_AA00);
    dmem.write_word(BASE, 0xFFFF_FFFF, BYTE_ENABLE_WORD);
    assert_eq!(dmem.read_word(BASE), 0xFFFF_FFFF);
}

#[test]
fn out_of_range_reads_zero_and_drops_writes() {
    let mut dmem = mem();
    assert_eq!(dmem.read_word(0), 0);
    assert_eq!(dmem.read_word(BASE + 64), 0);
    dmem.store(BASE + 64, 0x1234, MemWidth::Word);
    dmem.store(0x0FFC, 0x1234, MemWidth::Word);
    assert_eq!(dmem.dump(BASE, 2), vec![0x8899_AABB, 0x1122_3344]);
    assert!(!dmem.contains(BASE + 64));
    assert!(dmem.contains(BASE + 60));
}

#[test]
fn clear_zeroes_memory() {
    let mut dmem = mem();
    dmem.clear();
    assert_eq!(dmem.dump(BASE, 2), vec![0, 0]);
}
