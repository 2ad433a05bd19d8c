//! Reference-model capability interface.
//!
//! The golden simulator is a black box: the driver only ever asks it to
//! advance one instruction, reveal architectural state, and accept a count
//! register override. Anything else (program loading, device models, decode)
//! is the simulator's own business.

/// Trait for the golden reference simulator.
///
/// The implementing object is constructed by the harness from the same
/// startup arguments as the overall process, so both models boot the same
/// program. The driver owns it for the whole run.
pub trait RefModel {
    /// Executes exactly one architectural instruction.
    fn exec_one(&mut self);
    /// Current program counter.
    fn pc(&self) -> u32;
    /// Last-fetched instruction word.
    fn last_instr(&self) -> u32;
    /// Value of general-purpose register `index` (0..=31).
    fn gpr(&self, index: usize) -> u32;
    /// Overwrites the CP0 Count register.
    ///
    /// Count is a cycle-driven side channel the two simulators naturally
    /// disagree on; the driver pushes the DUT's committed value in before
    /// the reference executes an `mfc0` from it.
    fn set_count(&mut self, value: u32);
    /// Dumps full architectural state to stderr for post-mortem diagnostics.
    fn dump(&self);
}
