//! The processor: pipeline latches, caches, register file, control flags,
//! and the cycle driver that sequences one simulated clock.

use crate::cache::Cache;
use crate::config::NUM_REGS;
use crate::isa::InstructionType;
use crate::latches::{DecodeExecute, ExecuteMemory, FetchDecode, LatchPair, MemoryWriteBack};
use crate::regfile::RegisterFile;
use crate::stages;
use crate::stats::Stats;

/// The simulated processor: architectural state plus the four pipeline
/// latches and the control flags the cycle driver coordinates.
#[derive(Debug)]
pub struct Cpu {
    /// Program counter.
    pub pc: u16,
    /// Register file and hazard scoreboard.
    pub regs: RegisterFile,
    /// Instruction cache.
    pub ic: Cache,
    /// Data cache.
    pub dc: Cache,

    /// Fetch/Decode latch.
    pub fd: LatchPair<FetchDecode>,
    /// Decode/Execute latch.
    pub de: LatchPair<DecodeExecute>,
    /// Execute/Memory latch.
    pub em: LatchPair<ExecuteMemory>,
    /// Memory/Write-Back latch.
    pub mw: LatchPair<MemoryWriteBack>,

    /// Set once HALT is decoded; blocks all future fetches.
    pub stop_fetch: bool,
    /// Set while a JMP/BEQZ is between Decode and Execute; blocks Fetch and Decode.
    pub branch_undecided: bool,
    prev_branch_undecided: bool,
    /// Set by Write-Back once HALT retires; the simulation loop stops on this.
    pub halted: bool,

    /// Execution statistics collected cycle by cycle.
    pub stats: Stats,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Creates a processor with zeroed caches/registers and PC at 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pc: 0,
            regs: RegisterFile::new(),
            ic: Cache::new(),
            dc: Cache::new(),
            fd: LatchPair::default(),
            de: LatchPair::default(),
            em: LatchPair::default(),
            mw: LatchPair::default(),
            stop_fetch: false,
            branch_undecided: false,
            prev_branch_undecided: false,
            halted: false,
            stats: Stats::new(),
        }
    }

    /// Loads the initial register image.
    pub fn load_registers(&mut self, values: &[u16; NUM_REGS]) {
        self.regs.load(values);
    }

    /// Runs one simulated clock cycle.
    ///
    /// Sequences the five stages in program order, flushes Fetch's
    /// speculative fetch when a branch is resolved, re-runs Decode in the
    /// same cycle Write-Back releases the hazard that was blocking it, and
    /// finally propagates the pipeline latches for the next cycle (see
    /// `DESIGN.md` for why this ordering is load-bearing, not incidental).
    pub fn tick(&mut self) {
        let executing = self.de.left;

        stages::fetch(self);
        stages::decode(self);

        let branch_rose = self.branch_undecided && !self.prev_branch_undecided;
        if branch_rose {
            self.fd.right.valid = false;
            self.pc = self.pc.wrapping_sub(2);
        }
        self.prev_branch_undecided = self.branch_undecided;

        stages::execute(self);
        stages::memory(self);

        let prev_hazardous = self.regs.scoreboard.hazardous_count();
        stages::write_back(self);
        let curr_hazardous = self.regs.scoreboard.hazardous_count();

        if prev_hazardous > 0 && curr_hazardous == 0 {
            stages::decode(self);
            self.fd.advance();
            // Fetch itself stalled this cycle (it saw the hazard before
            // Write-Back cleared it) and so invalidated its output latch;
            // the instruction it had already fetched is still good, so force
            // the advanced latch valid again rather than losing it.
            self.fd.left.valid = true;
        } else if prev_hazardous == 0 {
            self.fd.advance();
        }
        // else: the hazard persists; leave `fd` untouched so the still-pending
        // fetched instruction is neither lost nor duplicated.

        self.de.advance();
        self.em.advance();
        self.mw.advance();

        self.update_stats(executing);

        tracing::trace!(
            pc = self.pc,
            cycle = self.stats.cycles,
            hazardous = self.regs.scoreboard.hazardous_count(),
            branch_undecided = self.branch_undecided,
            "tick"
        );
    }

    fn update_stats(&mut self, executing: DecodeExecute) {
        self.stats.cycles += 1;

        if self.regs.scoreboard.hazardous_count() > 0 {
            self.stats.data_stalls += 1;
        }

        if !executing.valid {
            self.stats.stalls += 1;
            return;
        }

        self.stats.total_instructions += 1;
        match executing.kind {
            InstructionType::Arithmetic => self.stats.arithmetic += 1,
            InstructionType::Logical => self.stats.logical += 1,
            InstructionType::Load | InstructionType::Store => self.stats.data += 1,
            InstructionType::Jmp | InstructionType::Beqz => self.stats.control += 1,
            InstructionType::Halt => self.stats.halt += 1,
            InstructionType::Bubble => {}
        }
    }
}
