//! Configuration for the co-simulation driver.
//!
//! This module defines the run-time knobs of a co-simulation run. It provides:
//! 1. **Defaults:** Baseline values matching the generated hardware model.
//! 2. **Structures:** Hierarchical config for general run control and the memory map.
//!
//! Configuration is supplied as JSON by the harness that links the driver, or
//! use `Config::default()` for the stock memory map. Contracts that must not
//! vary between runs (reset length, stall ceiling, trap address) are fixed
//! constants in [`crate::common::constants`], not configuration.

use serde::Deserialize;

/// Default configuration constants for the driver.
mod defaults {
    /// Size of the DRAM window in bytes (128 MiB).
    ///
    /// Requests below this address are serviced from the memory image; the
    /// value must match the DDR region of the generated hardware model.
    pub const DRAM_SIZE: usize = 0x0800_0000;
}

/// Top-level driver configuration.
///
/// # Examples
///
/// ```
/// use lockstep_core::config::Config;
///
/// let json = r#"{
///     "general": { "seed": 3735928559, "trace_commits": true },
///     "system": { "dram_size": 134217728 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.general.seed, Some(0xDEAD_BEEF));
/// assert!(config.general.trace_commits);
/// assert_eq!(config.system.dram_size, 0x0800_0000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run-control settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory map parameters
    #[serde(default)]
    pub system: SystemConfig,
}

/// General run-control settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Fixed random seed. When unset, the driver derives one from wall-clock
    /// time and the process id; set it to replay a failing run exactly.
    #[serde(default)]
    pub seed: Option<u32>,

    /// Emit a trace event for every accepted commit (noisy; for debugging
    /// a divergence window).
    #[serde(default)]
    pub trace_commits: bool,
}

/// Memory map parameters shared with the generated hardware model.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Size of the DRAM window in bytes
    #[serde(default = "SystemConfig::default_dram_size")]
    pub dram_size: usize,
}

impl SystemConfig {
    /// Returns the default DRAM window size.
    fn default_dram_size() -> usize {
        defaults::DRAM_SIZE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            dram_size: defaults::DRAM_SIZE,
        }
    }
}
