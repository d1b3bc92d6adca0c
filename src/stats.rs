//! Execution statistics collection and reporting.

use std::fmt::Write as _;

/// Running counters collected over the lifetime of a simulation.
///
/// `cycles` starts at 1 and `stalls` starts at -4, matching the reference
/// implementation's constructor: the four-cycle pipeline fill is absorbed up
/// front rather than counted as stall cycles (Design Notes, item 4).
#[derive(Debug, Clone)]
pub struct Stats {
    /// Total cycles elapsed, including the one the constructor pre-counts.
    pub cycles: u64,
    /// Instructions that retired through Execute (excludes bubbles).
    pub total_instructions: u64,
    /// ADD/SUB/MUL/INC retirements.
    pub arithmetic: u64,
    /// AND/OR/NOT/XOR retirements.
    pub logical: u64,
    /// LOAD/STORE retirements.
    pub data: u64,
    /// JMP/BEQZ retirements.
    pub control: u64,
    /// HALT retirements.
    pub halt: u64,
    /// Cycles in which no instruction retired through Execute, less the
    /// four-cycle fill offset.
    pub stalls: i64,
    /// Cycles in which the hazard scoreboard held at least one hazardous
    /// register at cycle end.
    pub data_stalls: u64,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    /// Creates a fresh counter set, pre-seeded the way the reference
    /// implementation's constructor does.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cycles: 1,
            total_instructions: 0,
            arithmetic: 0,
            logical: 0,
            data: 0,
            control: 0,
            halt: 0,
            stalls: -4,
            data_stalls: 0,
        }
    }

    /// Cycles per instruction: `(cycles - 1) / total_instructions`.
    ///
    /// Returns `0.0` if no instruction ever retired, to avoid dividing by
    /// zero on a program that halts immediately.
    #[must_use]
    pub fn cpi(&self) -> f64 {
        if self.total_instructions == 0 {
            0.0
        } else {
            (self.cycles - 1) as f64 / self.total_instructions as f64
        }
    }

    /// Stall cycles attributable to control hazards: `stalls - data_stalls`.
    #[must_use]
    pub fn control_stalls(&self) -> i64 {
        self.stalls - self.data_stalls as i64
    }

    /// Renders the ten-line `<label>: <value>` report (§6).
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total Instructions: {}", self.total_instructions);
        let _ = writeln!(out, "Arithmetic Instructions: {}", self.arithmetic);
        let _ = writeln!(out, "Logical Instructions: {}", self.logical);
        let _ = writeln!(out, "Data Instructions: {}", self.data);
        let _ = writeln!(out, "Control Instructions: {}", self.control);
        let _ = writeln!(out, "Halt Instructions: {}", self.halt);
        let _ = writeln!(out, "CPI: {}", self.cpi());
        let _ = writeln!(out, "Total Stalls: {}", self.stalls);
        let _ = writeln!(out, "Data Stalls: {}", self.data_stalls);
        let _ = writeln!(out, "Control Stalls: {}", self.control_stalls());
        out
    }
}
