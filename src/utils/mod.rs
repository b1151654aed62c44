//! Utility modules
//!
//! - **error**: crate-level error type
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{Result, RoutingError};
pub use logging::{LoggingConfig, init_logging};
