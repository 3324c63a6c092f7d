//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers render
//! user-input conditions (not found, invalid category, bad formats) as
//! messages and return Ok; only infrastructure failures propagate.

pub mod filter;
pub mod record;
pub mod summary;

pub use filter::handle_filter;
pub use record::{handle_add, handle_delete, handle_edit, handle_list};
pub use summary::handle_summary;
