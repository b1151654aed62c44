//! Core traits module
//!
//! Contains the abstract seams the routing layer plugs into

pub mod transport;

pub use transport::*;
