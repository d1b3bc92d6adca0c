//! Instruction set: opcode map, field layout, and branch target arithmetic.
//!
//! Assembling instruction words is explicitly out of the core's scope
//! (§1, §7) — this module only decodes. Test code that needs to construct
//! instruction words builds them locally rather than reusing anything here.

/// `ADD R1, R2, R3` — arithmetic, R1 ← R2 + R3.
pub const OP_ADD: u8 = 0;
/// `SUB R1, R2, R3` — arithmetic, R1 ← R2 - R3.
pub const OP_SUB: u8 = 1;
/// `MUL R1, R2, R3` — arithmetic, R1 ← R2 * R3.
pub const OP_MUL: u8 = 2;
/// `INC R1` — arithmetic, R1 ← R1 + 1.
pub const OP_INC: u8 = 3;
/// `AND R1, R2, R3` — logical, R1 ← R2 & R3.
pub const OP_AND: u8 = 4;
/// `OR R1, R2, R3` — logical, R1 ← R2 | R3.
pub const OP_OR: u8 = 5;
/// `NOT R1, R2` — logical, R1 ← !R2.
pub const OP_NOT: u8 = 6;
/// `XOR R1, R2, R3` — logical, R1 ← R2 ^ R3.
pub const OP_XOR: u8 = 7;
/// `LOAD R1, (R2)+imm` — R1 ← DC[R2 + imm].
pub const OP_LOAD: u8 = 8;
/// `STORE R1, (R2)+imm` — DC[R2 + imm] ← R1.
pub const OP_STORE: u8 = 9;
/// `JMP +imm8` — PC ← PC + signext(imm8) * 2.
pub const OP_JMP: u8 = 10;
/// `BEQZ R1, +imm8` — if R1 == 0, PC ← PC + signext(imm8) * 2.
pub const OP_BEQZ: u8 = 11;
/// `HALT` — stop fetching and drain the pipeline.
pub const OP_HALT: u8 = 15;

/// The class a decoded instruction belongs to, used by Execute/Memory/
/// Write-Back to dispatch without re-inspecting the raw opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstructionType {
    /// No instruction: an empty pipeline slot that carries no work.
    #[default]
    Bubble,
    /// ADD, SUB, MUL, or INC.
    Arithmetic,
    /// AND, OR, NOT, or XOR.
    Logical,
    /// LOAD.
    Load,
    /// STORE.
    Store,
    /// JMP.
    Jmp,
    /// BEQZ.
    Beqz,
    /// HALT.
    Halt,
}

/// Extracts the 4-bit opcode from the top nibble of an instruction word.
#[must_use]
pub fn opcode(word: u16) -> u8 {
    ((word >> 12) & 0xF) as u8
}

/// Extracts the R1 field, bits `[11:8]`.
#[must_use]
pub fn field_r1(word: u16) -> usize {
    ((word >> 8) & 0xF) as usize
}

/// Extracts the R2 field, bits `[7:4]`.
#[must_use]
pub fn field_r2(word: u16) -> usize {
    ((word >> 4) & 0xF) as usize
}

/// Extracts the R3 / 4-bit immediate field, bits `[3:0]`.
#[must_use]
pub fn field_r3(word: u16) -> usize {
    (word & 0xF) as usize
}

/// Extracts the STORE/LOAD 4-bit immediate, bits `[3:0]`.
#[must_use]
pub fn field_imm4(word: u16) -> u8 {
    (word & 0xF) as u8
}

/// Extracts the JMP 8-bit offset, bits `[11:4]`.
#[must_use]
pub fn field_imm8_jmp(word: u16) -> u8 {
    ((word >> 4) & 0xFF) as u8
}

/// Extracts the BEQZ 8-bit offset, bits `[7:0]`.
#[must_use]
pub fn field_imm8_beqz(word: u16) -> u8 {
    (word & 0xFF) as u8
}

/// Resolves the destination PC for a JMP/taken-BEQZ given the *live* PC at
/// Execute time (not the branch instruction's own fetch address — Fetch has
/// already advanced PC past the instruction fetched behind the branch by
/// the time Execute runs) and the branch's raw 8-bit offset field.
///
/// The offset is sign-extended as a two's-complement 8-bit quantity
/// *before* being doubled into a byte displacement (see `DESIGN.md`'s
/// sign-extension resolution).
#[must_use]
pub fn branch_target(pc: u16, imm8: u8) -> u16 {
    let signed: i16 = if imm8 & 0x80 != 0 {
        i16::from(imm8) - 256
    } else {
        i16::from(imm8)
    };
    let disp = signed.wrapping_mul(2);
    pc.wrapping_add(disp as u16)
}
