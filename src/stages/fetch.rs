//! Fetch stage.

use crate::cpu::Cpu;
use crate::latches::FetchDecode;

/// Reads the next instruction word from the instruction cache, unless a
/// control hazard, data hazard, or HALT is blocking Fetch.
///
/// The output latch's `valid` bit is set to `!stall` unconditionally, ahead
/// of the stall check, so a stall clears it even if it held a
/// still-unconsumed instruction fetched in an earlier cycle (the cycle
/// driver's hazard-release path is what keeps that instruction from being
/// lost: it re-validates this latch once Decode is finally able to consume
/// it, see `Cpu::tick`). On stall the instruction word itself is left
/// untouched, only the validity changes; PC is not advanced.
pub fn fetch(cpu: &mut Cpu) {
    let stall = cpu.stop_fetch || cpu.branch_undecided || cpu.regs.scoreboard.hazardous_count() > 0;
    cpu.fd.right.valid = !stall;
    if stall {
        return;
    }

    let pc = cpu.pc;
    let inst = cpu.ic.read_word_be(pc);
    cpu.fd.right = FetchDecode { valid: true, inst };
    cpu.pc = pc.wrapping_add(2);
}
