//! Money type for representing currency amounts
//!
//! Amounts are kept as `f64`, the same way the ledger's totals are summed.
//! There is no cents rounding: display formatting rounds to two places but
//! arithmetic never does, so fractional cents can accumulate in a balance.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in whole currency units (e.g. `12.5` is $12.50)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a float
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10.50", "$10.50", "10", "1e3"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let s = s.strip_prefix('$').unwrap_or(s);

        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        // Only one sign, and only ahead of the currency symbol.
        if s.starts_with(['+', '-']) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value: f64 = s
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        if value == 0.0 {
            return Ok(Self::zero());
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// Whole amounts are written as integers so an export reads `500`, not `500.0`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

// Exports written by form-driven front ends may carry the amount as a string.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                Ok(Money(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Ok(if v == 0.0 { Money::zero() } else { Money(v) })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                Money::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
