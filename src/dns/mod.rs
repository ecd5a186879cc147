//! DNS module.
//!
//! This module provides DNS-related functionality including:
//! - The fixed public resolver registry
//! - Timed resolution probes
//! - Core data types

pub mod probe;
pub mod registry;
pub mod types;

pub use probe::Prober;
pub use types::*;
