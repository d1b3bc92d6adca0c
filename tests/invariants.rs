//! Cycle-level invariants from §8 that are observable through the public
//! API: the PC only ever holds still or advances by 2 in a hazard-only
//! program with no control flow (P5, restricted to the no-branch case),
//! and the hazard scoreboard's aggregate counter never goes negative or
//! outlives the last register it was tracking (P1, exercised pipeline-wide
//! rather than unit-at-a-time as in `tests/regfile.rs`).

mod common;

use common::{cpu_with_program, inc};

/// P5 (no-branch case): across an INC hazard chain, the PC only ever holds
/// still (stalled Fetch) or advances by exactly 2 (a successful fetch).
/// It never decrements or jumps, since this program has no JMP/BEQZ.
#[test]
fn pc_only_holds_or_advances_by_two_without_branches() {
    let mut cpu = cpu_with_program(&[inc(1), inc(1), inc(1), common::halt()]);

    let mut prev_pc = cpu.pc;
    let mut cycles = 0u64;
    while !cpu.halted {
        cpu.tick();
        let delta = i32::from(cpu.pc) - i32::from(prev_pc);
        assert!(
            delta == 0 || delta == 2,
            "PC moved by {delta} in a branch-free program (from {prev_pc} to {})",
            cpu.pc
        );
        prev_pc = cpu.pc;
        cycles += 1;
        assert!(cycles <= 100, "program did not halt within 100 cycles");
    }
}

/// P1, exercised across a full run rather than one scoreboard call at a
/// time: the hazardous-register counter must never underflow (observable
/// as a panic on the `u32` subtraction inside `Scoreboard::release` if the
/// invariant were ever violated) and must return to zero once every
/// in-flight producer has retired.
#[test]
fn hazardous_count_settles_at_zero_after_halt() {
    let mut cpu = cpu_with_program(&[inc(1), inc(1), inc(1), common::halt()]);
    let mut cycles = 0u64;
    while !cpu.halted {
        cpu.tick();
        cycles += 1;
        assert!(cycles <= 100, "program did not halt within 100 cycles");
    }
    assert_eq!(cpu.regs.scoreboard.hazardous_count(), 0);
}
