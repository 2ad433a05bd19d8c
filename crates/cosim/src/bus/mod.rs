//! The DUT-facing memory system: image, dispatch, and peripheral registry.
//!
//! This module owns everything between the DUT's request bus and the bytes
//! that answer it:
//! 1. **Memory Image:** The flat DRAM window both simulators booted from.
//! 2. **IO Dispatcher:** Per-cycle routing of requests to image, devices, or
//!    the GPIO trap.
//! 3. **Device Registry:** Named read-only peripherals owned by the harness.

/// Named peripheral devices and the registry that routes to them.
pub mod device;

/// Request routing between the memory image, devices, and the GPIO trap.
pub mod dispatch;

/// The flat DRAM-window byte image.
pub mod memory;

pub use device::{Device, DeviceRegistry};
pub use dispatch::IoDispatcher;
pub use memory::MemImage;
