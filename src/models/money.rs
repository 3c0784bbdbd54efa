//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 cents) to avoid
//! floating-point precision issues. Provides safe arithmetic operations
//! and formatting. The type is currency-neutral; symbol rendering lives
//! in the `format` module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount stored as minor units (hundredths of the currency unit)
///
/// Using i64 cents keeps sums exact and supports amounts up to roughly
/// 92 quadrillion major units in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use pocketledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole major units
    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole major-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor-unit portion (0-99)
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Render without padding: whole amounts drop the decimal part entirely
    /// and fractional amounts drop a trailing zero ("120", "7.5", "3.25").
    ///
    /// This is the form raw amounts take in exported data.
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = (self.0 / 100).abs();
        let minor = (self.0 % 100).abs();
        if minor == 0 {
            format!("{}{}", sign, major)
        } else if minor % 10 == 0 {
            format!("{}{}.{}", sign, major, minor / 10)
        } else {
            format!("{}{}.{:02}", sign, major, minor)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor())
        }
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parse a plain decimal amount: "10.50", "-10.50", "10", "10.5"
    ///
    /// Integer input is taken as whole major units.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let cents = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let major: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fractional part to 2 digits
            let minor_str = parts[1];
            let minor: i64 = match minor_str.len() {
                0 => 0,
                1 => {
                    minor_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => minor_str
                    .get(..2)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            major * 100 + minor
        } else {
            // Integer format - whole major units
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
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
