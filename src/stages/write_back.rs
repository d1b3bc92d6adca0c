//! Write-Back stage.

use crate::cpu::Cpu;
use crate::isa::InstructionType;

/// Commits the Memory/Write-Back latch to the register file, releasing any
/// hazard on the destination register, or sets `halted` for HALT.
pub fn write_back(cpu: &mut Cpu) {
    let input = cpu.mw.left;
    if !input.valid {
        return;
    }

    match input.kind {
        InstructionType::Load => cpu.regs.write(input.dest, input.load_data),
        InstructionType::Arithmetic | InstructionType::Logical => {
            cpu.regs.write(input.dest, input.alu_output);
        }
        InstructionType::Halt => cpu.halted = true,
        _ => {}
    }
}
