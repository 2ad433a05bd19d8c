//! Hardware-model (DUT) capability interface.
//!
//! This module defines the trait the driver uses to step the design under
//! test. It provides:
//! 1. **Clocking:** Clock/reset inputs and the per-edge evaluate operation.
//! 2. **Commit View:** The retirement signals compared against the reference.
//! 3. **Memory-Request Bus:** The request fields serviced by the IO dispatcher.
//!
//! The field layout below must stay bit-exact with whatever hardware-model
//! generator produced the implementing type; it is the only wire format the
//! driver has.

/// Function code of a DUT memory request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemFunc {
    /// The DUT wants 4 bytes placed in its response slot.
    Read,
    /// The DUT presents 4 data bytes gated by the write strobe.
    Write,
}

/// One cycle's view of the DUT memory-request bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemRequest {
    /// Whether the DUT is presenting a request this cycle.
    pub valid: bool,
    /// Byte address of the access.
    pub addr: u32,
    /// Data word for writes (ignored for reads).
    pub data: u32,
    /// Read or write.
    pub func: MemFunc,
    /// Write-strobe mask: bit `i` gates byte `i` of the data word.
    pub strobe: u8,
}

impl MemRequest {
    /// A read request for 4 bytes at `addr`.
    pub fn read(addr: u32) -> Self {
        Self {
            valid: true,
            addr,
            data: 0,
            func: MemFunc::Read,
            strobe: 0,
        }
    }

    /// A write request presenting `data` at `addr`, gated by `strobe`.
    pub fn write(addr: u32, data: u32, strobe: u8) -> Self {
        Self {
            valid: true,
            addr,
            data,
            func: MemFunc::Write,
            strobe,
        }
    }
}

impl Default for MemRequest {
    /// An idle bus (no request this cycle).
    fn default() -> Self {
        Self {
            valid: false,
            addr: 0,
            data: 0,
            func: MemFunc::Read,
            strobe: 0,
        }
    }
}

/// Trait for the hardware model under test.
///
/// The driver owns the implementing object for the whole run and is its only
/// mutator. Implementations wrap whatever the RTL simulation engine
/// generated; none of the driver's logic depends on how `eval` is computed.
pub trait Dut {
    /// Drives the clock input (`false` = low, `true` = high).
    fn set_clock(&mut self, high: bool);
    /// Drives the reset input (`true` = reset asserted).
    fn set_reset(&mut self, active: bool);
    /// Evaluates combinational and sequential logic for the current inputs.
    fn eval(&mut self);
    /// Whether an instruction retires this cycle.
    fn commit_valid(&self) -> bool;
    /// PC of the retiring instruction.
    fn commit_pc(&self) -> u32;
    /// Instruction word of the retiring instruction.
    fn commit_instr(&self) -> u32;
    /// Committed value of general-purpose register `index` (0..=31).
    fn commit_gpr(&self, index: usize) -> u32;
    /// Current state of the memory-request bus.
    fn mem_request(&self) -> MemRequest;
    /// Writes the read-response slot of the memory-request bus.
    fn set_mem_response(&mut self, word: u32);

    /// Seeds the model's internal randomization (uninitialized-state init).
    /// Models without randomized state ignore it.
    fn seed_rng(&mut self, seed: u32) {
        let _ = seed;
    }
}
