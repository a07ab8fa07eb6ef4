//! ALU Shift Tests.
//!
//! The shift amount is the low five bits of operand B; higher bits are ignored.

use proptest::prelude::*;
use rstest::rstest;
use rvpipe_core::core::pipeline::signals::AluOp;
use rvpipe_core::core::units::alu::Alu;

fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b).result
}

#[rstest]
#[case(AluOp::Sll, 1, 31, 0x8000_0000)]
#[case(AluOp::Sll, 0xFFFF_FFFF, 4, 0xFFFF_FFF0)]
#[case(AluOp::Srl, 0x8000_0000, 31, 1)]
#[case(AluOp::Srl, 0xF000_0000, 4, 0x0F00_0000)]
#[case(AluOp::Sra, 0x8000_0000, 31, 0xFFFF_FFFF)]
#[case(AluOp::Sra, 0xF000_0000, 4, 0xFF00_0000)]
#[case(AluOp::Sra, 0x7000_0000, 4, 0x0700_0000)]
fn shift_vectors(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(alu(op, a, b), expected);
}

#[test]
fn shift_by_32_is_shift_by_0() {
    assert_eq!(alu(AluOp::Sll, 0x1234, 32), 0x1234);
    assert_eq!(alu(AluOp::Srl, 0x1234, 32), 0x1234);
    assert_eq!(alu(AluOp::Sra, 0x8000_1234, 32), 0x8000_1234);
}

proptest! {
    #[test]
    fn shift_amount_masked_to_five_bits(a: u32, b: u32) {
        let sh = b & 0x1F;
        prop_assert_eq!(alu(AluOp::Sll, a, b), a << sh);
        prop_assert_eq!(alu(AluOp::Srl, a, b), a >> sh);
        prop_assert_eq!(alu(AluOp::Sra, a, b), ((a as i32) >> sh) as u32);
    }
}
