//! The lock-step simulation core.
//!
//! This module contains the run loop and everything it threads through:
//! 1. **Run State:** The explicit per-run counters and flags.
//! 2. **Equivalence Check:** Ordered architectural comparison after commits.
//! 3. **Driver:** Clock stepping, commit synchronization, and the fatal
//!    policy.

/// Ordered architectural comparison between the two models.
pub mod check;

/// The clock loop and run lifecycle.
pub mod driver;

/// Explicit run state and liveness accounting.
pub mod state;

pub use check::check_commit;
pub use driver::CosimDriver;
pub use state::RunState;
