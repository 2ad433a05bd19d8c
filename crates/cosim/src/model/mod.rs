//! Capability interfaces over the two external simulators.
//!
//! Both the hardware model and the reference simulator are opaque
//! collaborators: the driver steps them, reads their architectural state,
//! and never looks inside. Keeping them behind traits lets tests substitute
//! scripted fakes for either side.

/// Hardware-model (DUT) interface and its memory-request bus types.
pub mod dut;

/// Reference-model interface.
pub mod reference;

pub use dut::{Dut, MemFunc, MemRequest};
pub use reference::RefModel;
