//! Configuration module for spendlog
//!
//! Provides XDG-compliant resolution of the data directory holding the
//! expense file.

pub mod paths;

pub use paths::Paths;
