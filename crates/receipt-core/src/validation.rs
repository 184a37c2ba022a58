//! # Validation Module
//!
//! Field parsing for receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP boundary (receipt-api)                                  │
//! │  ├── JSON syntax                                                       │
//! │  └── Structural completeness (every field present, correct type)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store (receipt-store)                                        │
//! │  └── Accepts the receipt verbatim, no semantic checks                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring (THIS MODULE)                                        │
//! │  ├── total / price     → Money          (InvalidAmount)                │
//! │  ├── purchaseDate      → NaiveDate      (InvalidFormat)                │
//! │  └── purchaseTime      → NaiveTime      (InvalidFormat)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{parse_amount, parse_purchase_time};
//!
//! assert_eq!(parse_amount("total", "35.35").unwrap().cents(), 3535);
//! assert!(parse_purchase_time("13:01").is_ok());
//! assert!(parse_purchase_time("1pm").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted time layouts, tried in order. `%.f` also matches no fraction.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

// =============================================================================
// Amounts
// =============================================================================

/// Parses a decimal amount (total or price) into [`Money`].
///
/// ## Example
/// ```rust
/// use receipt_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("total", "9.00").unwrap().cents(), 900);
/// assert!(parse_amount("items[0].price", "9.001").is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str) -> ValidationResult<Money> {
    raw.parse::<Money>()
        .map_err(|_| ValidationError::invalid_amount(field, raw))
}

// =============================================================================
// Dates and Times
// =============================================================================

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// Impossible dates such as `2022-02-30` are rejected.
pub fn parse_purchase_date(raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        ValidationError::invalid_format("purchaseDate", format!("'{raw}' is not YYYY-MM-DD ({e})"))
    })
}

/// Parses a 24-hour time of day (`HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`).
///
/// Leap seconds (`:60`) are rejected.
pub fn parse_purchase_time(raw: &str) -> ValidationResult<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
        // chrono encodes a leap second as nanosecond >= 1_000_000_000
        .filter(|time| time.nanosecond() < 1_000_000_000)
        .ok_or_else(|| {
            ValidationError::invalid_format("purchaseTime", format!("'{raw}' is not HH:MM[:SS]"))
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_amount_names_field() {
        let err = parse_amount("items[3].price", "abc").unwrap_err();
        assert_eq!(err, ValidationError::invalid_amount("items[3].price", "abc"));
    }

    #[test]
    fn test_parse_purchase_date() {
        let date = parse_purchase_date("2022-01-01").unwrap();
        assert_eq!(date.day(), 1);
        assert_eq!(date.month(), 1);
    }

    #[test]
    fn test_parse_purchase_date_rejects_bad_input() {
        for raw in ["", "2022/01/01", "01-01-2022", "2022-02-30", "2022-13-01", "yesterday"] {
            let err = parse_purchase_date(raw).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "purchaseDate"),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_purchase_time_layouts() {
        assert_eq!(
            parse_purchase_time("13:01").unwrap(),
            NaiveTime::from_hms_opt(13, 1, 0).unwrap()
        );
        assert_eq!(
            parse_purchase_time("14:00:00").unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
        assert_eq!(
            parse_purchase_time("15:59:59.500").unwrap(),
            NaiveTime::from_hms_milli_opt(15, 59, 59, 500).unwrap()
        );
    }

    #[test]
    fn test_parse_purchase_time_rejects_bad_input() {
        for raw in ["", "25:00", "14:60", "2pm", "14-00", "15:59:60", "23:59:60.5"] {
            let err = parse_purchase_time(raw).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "purchaseTime"),
                "input {raw:?}"
            );
        }
    }
}
