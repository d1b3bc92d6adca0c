//! Functional-unit tests: modular wraparound semantics, no flags.

use pipe5sim::alu;
use pipe5sim::isa;
use rstest::rstest;

#[rstest]
#[case(isa::OP_ADD, 0xFFFF, 1, 0)]
#[case(isa::OP_SUB, 0, 1, 0xFFFF)]
#[case(isa::OP_MUL, 0x8000, 2, 0)]
#[case(isa::OP_INC, 5, 0xBEEF, 6)] // INC ignores its second operand
#[case(isa::OP_INC, 0xFFFF, 0, 0)]
fn arithmetic_wraps_modularly(#[case] op: u8, #[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(alu::arithmetic(op, a, b), expected);
}

#[rstest]
#[case(isa::OP_AND, 0b1100, 0b1010, 0b1000)]
#[case(isa::OP_OR, 0b1100, 0b1010, 0b1110)]
#[case(isa::OP_XOR, 0b1100, 0b1010, 0b0110)]
#[case(isa::OP_NOT, 0x00FF, 0xDEAD, 0xFF00)] // NOT ignores its second operand
fn logical_ops(#[case] op: u8, #[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(alu::logical(op, a, b), expected);
}
