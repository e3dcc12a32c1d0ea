//! Core functionality for the mailroom actor messaging system.

pub mod actor;

pub use actor::*;
