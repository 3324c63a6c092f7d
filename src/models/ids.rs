//! Strongly-typed ID wrapper for expense records
//!
//! Ids are small sequential integers assigned on creation, never random.
//! The newtype keeps raw integers from other sources out of id positions
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap an existing raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The id assigned to the first record of an empty store
    pub const fn first() -> Self {
        Self(1)
    }

    /// The id following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the underlying integer
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
