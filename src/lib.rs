//! spendlog - Personal expense tracking from the command line
//!
//! This library provides the core functionality for the spendlog CLI:
//! recording discrete expense entries to a local JSON file and listing,
//! editing, deleting, filtering, and summarizing them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data-directory and path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (expense record, amount, categories, months)
//! - `storage`: JSON file storage with tolerant loads and atomic saves
//! - `services`: Record operations and filter queries
//! - `reports`: Monthly and per-category spending summaries
//! - `display`: Terminal formatting
//! - `cli`: Command handlers bridging clap and the services
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::Paths;
//! use spendlog::storage::ExpenseStore;
//!
//! let paths = Paths::new()?;
//! let store = ExpenseStore::open(&paths);
//! let expenses = store.load()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
