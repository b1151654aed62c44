//! Core functionality for OpenRouter routing
//!
//! This module contains the routing logic, the transport seam it plugs into and
//! the value types both sides share.

pub mod providers;
pub mod traits;
pub mod types;
