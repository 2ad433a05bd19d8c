//! Explicit per-run state threaded through the cycle loop.
//!
//! Everything mutable about a run lives in one struct owned by the driver
//! and passed by exclusive reference to whichever component needs it. The
//! silent-cycle accounting doubles as the liveness monitor: every cycle
//! bumps the counter, every accepted commit clears it, and crossing the
//! ceiling is fatal.

use crate::common::constants::STALL_THRESHOLD;
use crate::common::error::CosimError;

/// Mutable state of one co-simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunState {
    /// Clock cycles since reset was released.
    pub cycles: u64,
    /// Consecutive cycles without an instruction commit.
    pub silent_cycles: u64,
    /// Whether the run has ended.
    pub finished: bool,
    /// Exit code recorded by the GPIO trap write.
    pub exit_code: i32,
    /// Seed used for this run's randomization (printed at startup and on
    /// every fatal report; replaying it reproduces the run exactly).
    pub seed: u32,
}

impl RunState {
    /// Creates the state for a fresh run.
    pub fn new(seed: u32) -> Self {
        Self {
            cycles: 0,
            silent_cycles: 0,
            finished: false,
            exit_code: 0,
            seed,
        }
    }

    /// Accounts for one post-reset clock cycle.
    ///
    /// The stall ceiling is checked before the commit path gets a chance to
    /// clear the counter, so a cycle that both reaches the ceiling and
    /// commits still trips.
    pub fn tick(&mut self) -> Result<(), CosimError> {
        self.cycles += 1;
        self.silent_cycles += 1;
        if self.silent_cycles >= STALL_THRESHOLD {
            return Err(CosimError::Stalled {
                cycle: self.cycles,
                silent: self.silent_cycles,
            });
        }
        Ok(())
    }

    /// Marks an accepted commit on the current cycle.
    pub fn record_commit(&mut self) {
        self.silent_cycles = 0;
    }

    /// Ends the run with `code` (the GPIO-trap path).
    pub fn finish(&mut self, code: i32) {
        self.finished = true;
        self.exit_code = code;
    }
}
