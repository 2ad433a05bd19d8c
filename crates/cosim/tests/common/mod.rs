//! Shared fixtures for the integration test suite.

/// Driver construction helpers and canned configurations.
pub mod harness;
