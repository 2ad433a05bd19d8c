//! Lock-step differential co-simulation driver.
//!
//! This crate drives a generated MIPS32 hardware model (DUT) in lock-step
//! with a golden reference simulator and kills the run at the first
//! architectural divergence. It provides:
//! 1. **Bus:** The DRAM-window memory image, per-cycle IO dispatch, and the
//!    GPIO trap that ends a run.
//! 2. **Models:** Capability traits over the two external simulators.
//! 3. **Sim:** The clock loop, commit synchronization, equivalence checks,
//!    and liveness monitoring.
//! 4. **ISA:** Just enough MIPS32 decoding to spot the commits lock-stepping
//!    treats specially.
//!
//! The two simulators stay black boxes: a harness constructs them, hands
//! them to [`CosimDriver::new`] together with the reference model's device
//! registry, and propagates [`CosimDriver::execute`]'s exit code.

/// The DUT-facing memory system (image, dispatcher, device registry).
pub mod bus;
/// Common constants and the fatal error taxonomy.
pub mod common;
/// Driver configuration (seed override, memory map).
pub mod config;
/// MIPS32 commit-word decoding.
pub mod isa;
/// Capability traits over the DUT and the reference model.
pub mod model;
/// The lock-step loop, run state, and equivalence checking.
pub mod sim;

/// Device abstraction over the reference model's peripherals.
pub use crate::bus::device::{Device, DeviceRegistry};
/// Fatal error taxonomy of a run.
pub use crate::common::error::CosimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Capability traits a harness implements for its simulators.
pub use crate::model::{Dut, MemFunc, MemRequest, RefModel};
/// The driver owning the whole run; construct with `CosimDriver::new`.
pub use crate::sim::driver::CosimDriver;
/// Per-run counters and flags.
pub use crate::sim::state::RunState;
