//! Inter-stage pipeline latches.
//!
//! Each latch pair models one synchronous pipeline register: a stage reads
//! `left` (last cycle's output) and writes `right` (this cycle's output);
//! [`LatchPair::advance`] is the driver's end-of-cycle "rising edge" that
//! copies `right` into `left` for the next cycle.

use crate::isa::InstructionType;

/// A paired pipeline latch: `left` is read by the downstream stage, `right`
/// is written by the upstream stage.
#[derive(Debug, Clone, Default)]
pub struct LatchPair<T> {
    /// This cycle's input, produced by the previous cycle's upstream stage.
    pub left: T,
    /// This cycle's output, produced by the upstream stage just now.
    pub right: T,
}

impl<T: Clone> LatchPair<T> {
    /// Copies `right` into `left`, modelling the clock edge between cycles.
    pub fn advance(&mut self) {
        self.left = self.right.clone();
    }
}

/// Payload carried from Fetch to Decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchDecode {
    /// Whether this latch carries a real instruction (`false` = bubble).
    pub valid: bool,
    /// The raw 16-bit instruction word.
    pub inst: u16,
}

/// Payload carried from Decode to Execute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeExecute {
    /// Whether this latch carries a real instruction (`false` = bubble).
    pub valid: bool,
    /// Raw opcode, retained for ALU dispatch in Execute.
    pub opcode: u8,
    /// Instruction class, used by later stages to dispatch without
    /// re-inspecting the opcode.
    pub kind: InstructionType,
    /// First ALU operand / branch condition register contents / STORE data.
    pub src1: u16,
    /// Second ALU operand / LOAD-STORE base register contents.
    pub src2: u16,
    /// Destination register index (ARITHMETIC/LOGICAL/LOAD).
    pub dest: usize,
    /// Raw offset field (LOAD/STORE 4-bit immediate, JMP/BEQZ 8-bit offset).
    pub offset: u8,
}

/// Payload carried from Execute to Memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteMemory {
    /// Whether this latch carries a real instruction (`false` = bubble).
    pub valid: bool,
    /// Instruction class, used by Memory/Write-Back to dispatch.
    pub kind: InstructionType,
    /// ALU result (arithmetic/logical result, or LOAD/STORE effective address).
    pub alu_output: u16,
    /// Data to be written by a STORE.
    pub store_data: u16,
    /// Destination register index (ARITHMETIC/LOGICAL/LOAD).
    pub dest: usize,
}

/// Payload carried from Memory to Write-Back.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryWriteBack {
    /// Whether this latch carries a real instruction (`false` = bubble).
    pub valid: bool,
    /// Instruction class, used by Write-Back to dispatch.
    pub kind: InstructionType,
    /// ALU result, committed for ARITHMETIC/LOGICAL.
    pub alu_output: u16,
    /// Data loaded from the data cache, committed for LOAD.
    pub load_data: u16,
    /// Destination register index.
    pub dest: usize,
}
