//! Core type definition module
//!
//! Value types shared by the routing layer and the transports it fronts

pub mod model;
pub mod stream;
pub mod usage;

// Re-export all public types
pub use model::*;
pub use stream::*;
pub use usage::*;
