//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so sums and group averages over
//! rental rates, replacement costs and payments are exact. The data store
//! expresses amounts as decimals (`4.99`), which is also how they serialize.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use rental_reports::models::Money;
    /// let amount = Money::from_cents(499); // 4.99
    /// assert_eq!(amount.to_string(), "4.99");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Amount in currency units as a float
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a decimal amount to cents, rounding half away from zero
    pub fn from_decimal(value: f64) -> Result<Self, MoneyParseError> {
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return Err(MoneyParseError::InvalidFormat(value.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "4.99", "-4.99", "$4.99", "$-4.99", "4.9", "20".
    /// Extra fraction digits round half away from zero, like `from_decimal`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (sign_first, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let (sign_after, rest) = match rest.strip_prefix('-') {
            Some(stripped) if !sign_first => (true, stripped),
            Some(_) => return Err(invalid()),
            None => (false, rest),
        };
        let negative = sign_first || sign_after;

        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));
        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        let round_up = i64::from(digit(2) >= 5);
        let frac = digit(0) * 10 + digit(1) + round_up;

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.dollars().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(""))
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

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

/// Wire shapes accepted for an amount column
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawAmount::deserialize(deserializer)? {
            RawAmount::Integer(units) => units
                .checked_mul(100)
                .map(Money::from_cents)
                .ok_or_else(|| MoneyParseError::InvalidFormat(units.to_string())),
            RawAmount::Decimal(value) => Money::from_decimal(value),
            RawAmount::Text(text) => Money::parse(&text),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
