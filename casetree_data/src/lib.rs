//! Shared data model for test-management exports.

pub mod defs;

pub use defs::*;
