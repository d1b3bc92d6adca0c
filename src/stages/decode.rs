//! Decode stage.

use crate::cpu::Cpu;
use crate::isa::{self, InstructionType};
use crate::latches::DecodeExecute;

/// Decodes the instruction in the Fetch/Decode latch, reading operands from
/// the register file and marking hazards on any operand that is not yet
/// valid.
///
/// Stalls (leaving the Decode/Execute output latch a bubble) whenever a
/// hazard is outstanding, a branch is unresolved, HALT has already been
/// decoded, or the input latch itself is empty.
pub fn decode(cpu: &mut Cpu) {
    let externally_stalled = cpu.regs.scoreboard.hazardous_count() > 0
        || cpu.branch_undecided
        || cpu.stop_fetch
        || !cpu.fd.left.valid;

    if externally_stalled {
        cpu.de.right = DecodeExecute::default();
        return;
    }

    let inst = cpu.fd.left.inst;
    let op = isa::opcode(inst);

    let mut out = DecodeExecute {
        opcode: op,
        ..DecodeExecute::default()
    };

    match op {
        isa::OP_HALT => {
            cpu.stop_fetch = true;
            out.valid = true;
            out.kind = InstructionType::Halt;
        }

        isa::OP_BEQZ => {
            let r1 = isa::field_r1(inst);
            if cpu.regs.scoreboard.is_valid(r1) {
                cpu.branch_undecided = true;
                out.valid = true;
                out.kind = InstructionType::Beqz;
                out.src1 = cpu.regs.read(r1);
                out.offset = isa::field_imm8_beqz(inst);
            } else {
                cpu.regs.scoreboard.mark_hazard(r1);
            }
        }

        isa::OP_JMP => {
            cpu.branch_undecided = true;
            out.valid = true;
            out.kind = InstructionType::Jmp;
            out.offset = isa::field_imm8_jmp(inst);
        }

        isa::OP_STORE => {
            let r1 = isa::field_r1(inst);
            let r2 = isa::field_r2(inst);
            if cpu.regs.scoreboard.is_valid(r1) && cpu.regs.scoreboard.is_valid(r2) {
                out.valid = true;
                out.kind = InstructionType::Store;
                out.src1 = cpu.regs.read(r1);
                out.src2 = cpu.regs.read(r2);
                out.offset = isa::field_imm4(inst);
            } else {
                if !cpu.regs.scoreboard.is_valid(r1) {
                    cpu.regs.scoreboard.mark_hazard(r1);
                }
                if !cpu.regs.scoreboard.is_valid(r2) {
                    cpu.regs.scoreboard.mark_hazard(r2);
                }
            }
        }

        isa::OP_LOAD => {
            let r1 = isa::field_r1(inst);
            let r2 = isa::field_r2(inst);
            if cpu.regs.scoreboard.is_valid(r2) {
                out.valid = true;
                out.kind = InstructionType::Load;
                out.dest = r1;
                out.src2 = cpu.regs.read(r2);
                out.offset = isa::field_imm4(inst);
                cpu.regs.scoreboard.reserve(r1);
            } else {
                cpu.regs.scoreboard.mark_hazard(r2);
            }
        }

        isa::OP_ADD | isa::OP_SUB | isa::OP_MUL | isa::OP_AND | isa::OP_OR | isa::OP_XOR => {
            let r1 = isa::field_r1(inst);
            let r2 = isa::field_r2(inst);
            let r3 = isa::field_r3(inst);
            if cpu.regs.scoreboard.is_valid(r2) && cpu.regs.scoreboard.is_valid(r3) {
                out.valid = true;
                out.kind = if matches!(op, isa::OP_AND | isa::OP_OR | isa::OP_XOR) {
                    InstructionType::Logical
                } else {
                    InstructionType::Arithmetic
                };
                out.dest = r1;
                out.src1 = cpu.regs.read(r2);
                out.src2 = cpu.regs.read(r3);
                cpu.regs.scoreboard.reserve(r1);
            } else {
                if !cpu.regs.scoreboard.is_valid(r2) {
                    cpu.regs.scoreboard.mark_hazard(r2);
                }
                if !cpu.regs.scoreboard.is_valid(r3) {
                    cpu.regs.scoreboard.mark_hazard(r3);
                }
            }
        }

        isa::OP_INC => {
            let r1 = isa::field_r1(inst);
            if cpu.regs.scoreboard.is_valid(r1) {
                out.valid = true;
                out.kind = InstructionType::Arithmetic;
                out.dest = r1;
                out.src1 = cpu.regs.read(r1);
                cpu.regs.scoreboard.reserve(r1);
            } else {
                cpu.regs.scoreboard.mark_hazard(r1);
            }
        }

        isa::OP_NOT => {
            let r1 = isa::field_r1(inst);
            let r2 = isa::field_r2(inst);
            if cpu.regs.scoreboard.is_valid(r2) {
                out.valid = true;
                out.kind = InstructionType::Logical;
                out.dest = r1;
                out.src1 = cpu.regs.read(r2);
                cpu.regs.scoreboard.reserve(r1);
            } else {
                cpu.regs.scoreboard.mark_hazard(r2);
            }
        }

        // Undefined opcodes are treated as bubbles (§7).
        _ => {}
    }

    cpu.de.right = out;
}
