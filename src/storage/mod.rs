//! Storage layer for spendlog
//!
//! One JSON file holds the full expense list as a bare array. Loads are
//! failure tolerant: a missing or unparseable file yields an empty list
//! rather than an error. Saves go through a temp file and rename so a
//! crash mid-write cannot leave a truncated file behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Paths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Where a load result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// A readable expense file
    File,
    /// No file at the path; treated as "no data yet"
    Missing,
    /// A file that did not parse; treated as "no data yet"
    Corrupt,
}

/// A loaded expense list together with its provenance
#[derive(Debug, Clone)]
pub struct LoadedExpenses {
    pub expenses: Vec<Expense>,
    pub source: LoadSource,
}

/// Persistence for the expense list, bound to one file path
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the configured expense file location
    pub fn open(paths: &Paths) -> Self {
        Self::new(paths.expenses_file())
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full expense list.
    ///
    /// Missing and malformed files both yield an empty list; read failures
    /// on an existing file (e.g. permission denied) propagate.
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.load_with_source()?.expenses)
    }

    /// Load the full expense list, reporting whether it came from a real
    /// file, an absent file, or a corrupt one.
    pub fn load_with_source(&self) -> ExpenseResult<LoadedExpenses> {
        if !self.path.exists() {
            return Ok(LoadedExpenses {
                expenses: Vec::new(),
                source: LoadSource::Missing,
            });
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        match serde_json::from_str(&raw) {
            Ok(expenses) => Ok(LoadedExpenses {
                expenses,
                source: LoadSource::File,
            }),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable expense file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(LoadedExpenses {
                    expenses: Vec::new(),
                    source: LoadSource::Corrupt,
                })
            }
        }
    }

    /// Write the full expense list, replacing the file contents.
    ///
    /// Writes to a temp file in the same directory, then renames over the
    /// target. Creates the parent directory if needed.
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory so the rename stays on one filesystem
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, expenses)
            .map_err(|e| ExpenseError::Storage(format!("Failed to serialize expenses: {}", e)))?;

        writer
            .flush()
            .map_err(|e| ExpenseError::Storage(format!("Failed to flush expenses: {}", e)))?;

        writer
            .get_ref()
            .sync_all()
            .map_err(|e| ExpenseError::Storage(format!("Failed to sync expenses: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}
