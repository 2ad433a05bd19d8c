//! Common constants and types used throughout the co-simulation driver.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Architectural geometry, decode masks, and run-control limits.
//! 2. **Error Handling:** The fatal error taxonomy of a co-simulation run.

/// System-wide constants for bus geometry, decoding, and run control.
pub mod constants;

/// Fatal error definitions.
pub mod error;

pub use constants::{GPIO_TRAP_ADDR, GPR_COUNT, RESET_CYCLES, STALL_THRESHOLD, WORD_BYTES};
pub use error::CosimError;
