//! Fatal co-simulation error definitions.
//!
//! This module defines every way a run can die. It provides:
//! 1. **Divergence Errors:** Reference and DUT architectural state disagree after a checked commit.
//! 2. **Liveness Errors:** The DUT stopped retiring instructions for too long.
//! 3. **Setup Errors:** The device registry is missing a device the driver needs.
//!
//! The `Display` output of the divergence and stall variants is the exact
//! diagnostic line printed before the run aborts, so its format is part of
//! the user-visible contract.

use thiserror::Error;

/// Fatal conditions detected by the co-simulation driver.
///
/// None of these are recoverable: a divergence invalidates every later
/// comparison and a stall means the DUT will never commit again. The driver
/// reports the first error it sees and terminates the process.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CosimError {
    /// The reference model's post-commit PC differs from the DUT's
    /// committed PC.
    #[error("cycle {cycle}: pc: ref:{model:08x} <> dut:{dut:08x}")]
    PcMismatch {
        /// Cycle on which the mismatch was observed.
        cycle: u64,
        /// Program counter reported by the reference model.
        model: u32,
        /// Program counter committed by the DUT.
        dut: u32,
    },

    /// The reference model fetched a different instruction word than the
    /// DUT committed.
    #[error("cycle {cycle}: instr: ref:{model:08x} <> dut:{dut:08x}")]
    InstrMismatch {
        /// Cycle on which the mismatch was observed.
        cycle: u64,
        /// Instruction word fetched by the reference model.
        model: u32,
        /// Instruction word committed by the DUT.
        dut: u32,
    },

    /// A general-purpose register disagrees between the two models.
    ///
    /// Registers are compared in index order and only the first failing
    /// index is ever reported.
    #[error("cycle {cycle}: gpr[{index}]: ref:{model:08x} <> dut:{dut:08x}")]
    GprMismatch {
        /// Cycle on which the mismatch was observed.
        cycle: u64,
        /// Index of the first mismatching register (0..=31).
        index: usize,
        /// Register value held by the reference model.
        model: u32,
        /// Register value committed by the DUT.
        dut: u32,
    },

    /// No instruction commit was observed for the stall threshold.
    #[error("cycle {cycle}: no commits in {silent} cycles")]
    Stalled {
        /// Cycle on which the threshold was reached.
        cycle: u64,
        /// Number of consecutive commit-free cycles.
        silent: u64,
    },

    /// A device required at setup is missing from the registry.
    #[error("device '{name}' not found in registry")]
    DeviceNotFound {
        /// Name the driver looked up.
        name: String,
    },
}

impl CosimError {
    /// Whether this error is a state divergence (as opposed to a stall or a
    /// setup failure).
    ///
    /// Divergences run the shutdown hook before aborting so the diagnostic
    /// dump reflects a flushed DUT; stalls abort without it.
    pub fn is_divergence(&self) -> bool {
        matches!(
            self,
            Self::PcMismatch { .. } | Self::InstrMismatch { .. } | Self::GprMismatch { .. }
        )
    }
}
