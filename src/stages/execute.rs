//! Execute stage.

use crate::alu;
use crate::cpu::Cpu;
use crate::isa::{self, InstructionType};
use crate::latches::ExecuteMemory;

/// Executes the instruction in the Decode/Execute latch: resolves branches
/// and jumps (clearing `branch_undecided` and writing `pc` directly),
/// computes LOAD/STORE effective addresses, and runs the ALU for
/// arithmetic/logical instructions.
///
/// A taken BEQZ/JMP computes its target from the *live* `cpu.pc`, not the
/// branch's own fetch address: by the time Execute runs, Fetch has already
/// run this same cycle and left PC sitting just past the instruction fetched
/// behind the branch.
pub fn execute(cpu: &mut Cpu) {
    let input = cpu.de.left;
    if !input.valid {
        cpu.em.right = ExecuteMemory::default();
        return;
    }

    let mut out = ExecuteMemory {
        valid: true,
        kind: input.kind,
        dest: input.dest,
        ..ExecuteMemory::default()
    };

    match input.kind {
        InstructionType::Halt => {}

        InstructionType::Beqz => {
            let taken = input.src1 == 0;
            if taken {
                cpu.pc = isa::branch_target(cpu.pc, input.offset);
            }
            cpu.branch_undecided = false;
        }

        InstructionType::Jmp => {
            cpu.pc = isa::branch_target(cpu.pc, input.offset);
            cpu.branch_undecided = false;
        }

        InstructionType::Store => {
            out.alu_output = input.src2.wrapping_add(u16::from(input.offset));
            out.store_data = input.src1;
        }

        InstructionType::Load => {
            out.alu_output = input.src2.wrapping_add(u16::from(input.offset));
        }

        InstructionType::Logical => {
            out.alu_output = alu::logical(input.opcode, input.src1, input.src2);
        }

        InstructionType::Arithmetic => {
            out.alu_output = alu::arithmetic(input.opcode, input.src1, input.src2);
        }

        InstructionType::Bubble => {}
    }

    cpu.em.right = out;
}
