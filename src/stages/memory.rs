//! Memory stage.

use crate::cpu::Cpu;
use crate::isa::InstructionType;
use crate::latches::MemoryWriteBack;

/// Performs the LOAD/STORE access against the data cache; all other
/// instruction kinds pass their Execute results through unchanged.
pub fn memory(cpu: &mut Cpu) {
    let input = cpu.em.left;
    if !input.valid {
        cpu.mw.right = MemoryWriteBack::default();
        return;
    }

    let mut out = MemoryWriteBack {
        valid: true,
        kind: input.kind,
        alu_output: input.alu_output,
        dest: input.dest,
        ..MemoryWriteBack::default()
    };

    match input.kind {
        InstructionType::Load => {
            out.load_data = u16::from(cpu.dc.read_byte(input.alu_output));
        }
        InstructionType::Store => {
            cpu.dc.write_byte(input.alu_output, input.store_data as u8);
        }
        _ => {}
    }

    cpu.mw.right = out;
}
