//! Amount type for expense values
//!
//! Stores the decimal value the user entered. Older expense files carry
//! amounts as quoted strings, so deserialization accepts either a JSON
//! number or a numeric string; serialization always writes a number.

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A decimal monetary amount. No currency symbol, no enforced sign.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an Amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// The whole-unit portion, cut toward zero (19.99 -> 19, -5.5 -> -5)
    pub fn truncated(&self) -> i64 {
        self.0.trunc() as i64
    }

    /// Parse an amount from a string such as "19.99" or "-5"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        s.parse::<f64>()
            .map(Self)
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Amount(n)),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Amount)
                .map_err(|_| D::Error::custom(format!("amount is not numeric: '{}'", s))),
        }
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
