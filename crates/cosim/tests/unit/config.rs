//! # Configuration Tests
//!
//! Tests for configuration structures, deserialization, and defaults.

use lockstep_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.general.seed, None);
    assert!(!config.general.trace_commits);
    assert_eq!(config.system.dram_size, 0x0800_0000);
}

#[test]
fn test_general_config_defaults() {
    let general = GeneralConfig::default();
    assert_eq!(general.seed, None);
    assert!(!general.trace_commits);
}

#[test]
fn test_system_config_defaults() {
    let system = SystemConfig::default();
    assert_eq!(system.dram_size, 128 * 1024 * 1024);
}

#[test]
fn test_json_deserialization_full() {
    let json = r#"{
        "general": {
            "seed": 3735928559,
            "trace_commits": true
        },
        "system": {
            "dram_size": 4096
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.general.seed, Some(0xDEAD_BEEF));
    assert!(config.general.trace_commits);
    assert_eq!(config.system.dram_size, 4096);
}

#[test]
fn test_json_deserialization_empty_object() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.general.seed, None);
    assert!(!config.general.trace_commits);
    assert_eq!(config.system.dram_size, 0x0800_0000);
}

#[test]
fn test_json_partial_general_section() {
    let json = r#"{
        "general": {
            "trace_commits": true
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.general.seed, None);
    assert!(config.general.trace_commits);
    assert_eq!(config.system.dram_size, 0x0800_0000);
}

#[test]
fn test_json_seed_zero_is_some() {
    let json = r#"{
        "general": {
            "seed": 0
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.general.seed, Some(0));
}

#[test]
fn test_json_system_only() {
    let json = r#"{
        "system": {
            "dram_size": 65536
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.system.dram_size, 65536);
    assert_eq!(config.general.seed, None);
}
