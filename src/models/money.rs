//! Money type for representing currency amounts
//!
//! Amounts are whole currency units (yen) with no minor unit, stored as i64.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Symbol used by the `Display` impl
pub const DEFAULT_SYMBOL: &str = "¥";

/// Largest magnitude a single amount or opening balance may have
pub const MAX_AMOUNT: Money = Money(1_000_000_000_000);

/// A signed whole-unit monetary amount
///
/// Arithmetic saturates at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole yen
    ///
    /// # Examples
    /// ```
    /// use money_manager::models::Money;
    /// let amount = Money::from_yen(1500);
    /// assert_eq!(amount.to_string(), "¥1,500");
    /// ```
    pub const fn from_yen(yen: i64) -> Self {
        Self(yen)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole yen
    pub const fn yen(&self) -> i64 {
        self.0
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
        Self(self.0.saturating_abs())
    }

    /// Whether the magnitude is within [`MAX_AMOUNT`]
    pub const fn is_within_limit(&self) -> bool {
        self.0.unsigned_abs() <= MAX_AMOUNT.0.unsigned_abs()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "1000", "-1000", "¥1,000", "1,000" and "1_000".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest.strip_prefix(DEFAULT_SYMBOL).unwrap_or(rest);

        let digits: String = rest.chars().filter(|c| *c != ',' && *c != '_').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value: i64 = digits
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let grouped = group_thousands(self.0.unsigned_abs());
        if self.is_negative() {
            format!("-{}{}", symbol, grouped)
        } else {
            format!("{}{}", symbol, grouped)
        }
    }

    /// Format with an explicit sign, e.g. "+¥1,000" or "-¥300"
    pub fn format_signed(&self, symbol: &str) -> String {
        if self.is_negative() {
            self.format_with_symbol(symbol)
        } else {
            format!("+{}", self.format_with_symbol(symbol))
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specifiers work in report columns
        f.pad(&self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_yen(0).to_string(), "¥0");
        assert_eq!(Money::from_yen(999).to_string(), "¥999");
        assert_eq!(Money::from_yen(1000).to_string(), "¥1,000");
        assert_eq!(Money::from_yen(1234567).to_string(), "¥1,234,567");
        assert_eq!(Money::from_yen(-300).to_string(), "-¥300");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>8}", Money::from_yen(1000)), "  ¥1,000");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(Money::from_yen(1000).format_signed("¥"), "+¥1,000");
        assert_eq!(Money::from_yen(-50).format_signed("$"), "-$50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_yen(1000);
        let b = Money::from_yen(300);

        assert_eq!((a + b).yen(), 1300);
        assert_eq!((a - b).yen(), 700);
        assert_eq!((-a).yen(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("1000").unwrap().yen(), 1000);
        assert_eq!(Money::parse("¥1,000").unwrap().yen(), 1000);
        assert_eq!(Money::parse("-1_500").unwrap().yen(), -1500);
        assert!(Money::parse("10.50").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::from_yen(100), Money::from_yen(200), Money::from_yen(-50)]
            .into_iter()
            .sum();
        assert_eq!(total.yen(), 250);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_yen(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_yen(i64::MAX);
        assert_eq!(max + Money::from_yen(1), max);
        assert_eq!(Money::from_yen(i64::MIN) - Money::from_yen(1), Money::from_yen(i64::MIN));
        assert_eq!(-Money::from_yen(i64::MIN), max);

        let mut total = max;
        total += Money::from_yen(5);
        assert_eq!(total, max);
    }

    #[test]
    fn test_limit() {
        assert!(MAX_AMOUNT.is_within_limit());
        assert!((-MAX_AMOUNT).is_within_limit());
        assert!(!(MAX_AMOUNT + Money::from_yen(1)).is_within_limit());
    }
}
