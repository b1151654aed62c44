//! Integration tests for openrouter-routing
//!
//! These tests drive the public API across module boundaries.

pub mod config_tests;
pub mod streaming_tests;
pub mod usage_tests;
