//! # Money Module
//!
//! Provides the `Money` type for handling receipt totals and item prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    35.35 % 0.25 is not exactly 0.10 ❌ modulo artifacts                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" parses to 3535 cents                                         │
//! │    3535 % 25 == 10  → not a quarter multiple, exactly                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total: Money = "9.25".parse().unwrap();
//! assert_eq!(total.cents(), 925);
//! assert!(total.is_multiple_of(Money::from_cents(25)));
//! assert!(!total.is_whole_dollars());
//! ```

use std::str::FromStr;

use thiserror::Error;

/// Maximum number of fractional digits accepted when parsing.
const MAX_FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64**: Receipts are non-negative, but signed cents keep arithmetic
///   simple and match how amounts are held elsewhere
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Parsed, not deserialized**: Receipts carry amounts as strings and are
///   stored verbatim; parsing happens when a receipt is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the amount has no cents component.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::from_cents(5000).is_whole_dollars());
    /// assert!(!Money::from_cents(1250).is_whole_dollars());
    /// ```
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Checks if the amount is an exact multiple of `unit`.
    ///
    /// A zero unit never divides anything.
    #[inline]
    pub const fn is_multiple_of(&self, unit: Money) -> bool {
        unit.0 != 0 && self.0 % unit.0 == 0
    }

    /// Applies a rate in basis points and rounds the result UP to whole dollars.
    ///
    /// ## Implementation
    /// `ceil(cents × bps / 10000 / 100)` done in integers:
    /// `(cents × bps + 999_999) / 1_000_000` for non-negative amounts.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // $12.25 × 20% = $2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_dollars_at_rate(2000), 3);
    /// // $3.35 × 20% = $0.67 → 1
    /// assert_eq!(Money::from_cents(335).ceil_dollars_at_rate(2000), 1);
    /// ```
    pub fn ceil_dollars_at_rate(&self, bps: u32) -> i64 {
        // i128 keeps cents × bps from overflowing on large amounts
        let scaled = self.0 as i128 * bps as i128;
        let divisor: i128 = 10_000 * 100;
        let quotient = scaled / divisor;
        let ceiled = if scaled % divisor > 0 {
            quotient + 1
        } else {
            quotient
        };
        ceiled as i64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error returned when a string is not a plain decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal amount")]
pub struct ParseMoneyError;

/// Parses a plain decimal string such as `"35"`, `"35.3"` or `"35.35"`.
///
/// ## Accepted Grammar
/// ```text
/// amount   := digits [ "." fraction ]
/// digits   := [0-9]+
/// fraction := [0-9]{1,2}
/// ```
/// Signs, exponents and surrounding whitespace are rejected.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }
        if s.contains('.') && fraction.is_empty() {
            return Err(ParseMoneyError);
        }
        if fraction.len() > MAX_FRACTION_DIGITS || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }

        let dollars: i64 = whole.parse().map_err(|_| ParseMoneyError)?;
        // "5" → 0, "5.2" → 20, "5.25" → 25
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| ParseMoneyError)? * 10,
            _ => fraction.parse::<i64>().map_err(|_| ParseMoneyError)?,
        };

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Money)
            .ok_or(ParseMoneyError)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("35".parse::<Money>().unwrap().cents(), 3500);
        assert_eq!("35.3".parse::<Money>().unwrap().cents(), 3530);
        assert_eq!("35.35".parse::<Money>().unwrap().cents(), 3535);
        assert_eq!("0.00".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("007.05".parse::<Money>().unwrap().cents(), 705);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", ".", "1.", ".50", "-1.00", "+1.00", "1e3", "1.005", "1.2.3", " 1.00", "abc", "1,00"] {
            assert_eq!(raw.parse::<Money>(), Err(ParseMoneyError), "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_largest_amount_and_overflow() {
        assert_eq!("92233720368547758.07".parse::<Money>().unwrap().cents(), i64::MAX);
        assert_eq!("92233720368547758.08".parse::<Money>(), Err(ParseMoneyError));
        assert_eq!("100000000000000000".parse::<Money>(), Err(ParseMoneyError));
    }

    #[test]
    fn test_whole_dollars_and_multiples() {
        assert!(Money::from_cents(5000).is_whole_dollars());
        assert!(Money::from_cents(0).is_whole_dollars());
        assert!(!Money::from_cents(1250).is_whole_dollars());

        let quarter = Money::from_cents(25);
        assert!(Money::from_cents(1250).is_multiple_of(quarter));
        assert!(Money::from_cents(925).is_multiple_of(quarter));
        assert!(!Money::from_cents(3535).is_multiple_of(quarter));
        assert!(!Money::from_cents(100).is_multiple_of(Money::from_cents(0)));
    }

    #[test]
    fn test_ceil_dollars_at_rate() {
        assert_eq!(Money::from_cents(0).ceil_dollars_at_rate(2000), 0);
        assert_eq!(Money::from_cents(500).ceil_dollars_at_rate(2000), 1);
        assert_eq!(Money::from_cents(501).ceil_dollars_at_rate(2000), 2);
        assert_eq!(Money::from_cents(1200).ceil_dollars_at_rate(2000), 3);
        assert_eq!(Money::from_cents(1).ceil_dollars_at_rate(2000), 1);
    }

    #[test]
    fn test_is_positive() {
        assert!(!Money::from_cents(0).is_positive());
        assert!(Money::from_cents(1).is_positive());
    }
}
