//! SessionHub Server Library
//!
//! Exposes server modules for integration testing.

pub mod config;
pub mod logging;
pub mod middleware;
