//! # Domain Types
//!
//! The receipt as it is submitted and stored.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐         ┌─────────────────────┐               │
//! │  │      Receipt        │  1..*   │        Item         │               │
//! │  │  ─────────────────  │────────►│  ─────────────────  │               │
//! │  │  retailer           │         │  shortDescription   │               │
//! │  │  purchaseDate       │         │  price  ("6.49")    │               │
//! │  │  purchaseTime       │         └─────────────────────┘               │
//! │  │  total  ("35.35")   │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Fields
//! Amounts, dates and times are kept as the strings the client sent.
//! A receipt is accepted once it is structurally complete; parsing into
//! [`Money`], [`NaiveDate`] and [`NaiveTime`] happens at scoring time via
//! the accessors below.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Item
// =============================================================================

/// One line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description; surrounding whitespace is ignored when scoring.
    pub short_description: String,

    /// Price as a decimal string (e.g. "6.49").
    pub price: String,
}

impl Item {
    /// Creates an item from its description and price string.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    /// Parses the price. `field` names the item in error messages.
    pub fn parse_price(&self, field: &str) -> ValidationResult<Money> {
        validation::parse_amount(field, &self.price)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Every field is required on the wire; a missing or `null` field fails
/// deserialization. Once stored, a receipt is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,

    /// Purchase date, ISO `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM` or `HH:MM:SS`, no timezone.
    pub purchase_time: String,

    /// Line items in the order they appear; may be empty.
    pub items: Vec<Item>,

    /// Total amount paid as a decimal string.
    pub total: String,
}

impl Receipt {
    /// Parses the total.
    pub fn parse_total(&self) -> ValidationResult<Money> {
        validation::parse_amount("total", &self.total)
    }

    /// Parses the purchase date.
    pub fn parse_date(&self) -> ValidationResult<NaiveDate> {
        validation::parse_purchase_date(&self.purchase_date)
    }

    /// Parses the purchase time.
    pub fn parse_time(&self) -> ValidationResult<NaiveTime> {
        validation::parse_purchase_time(&self.purchase_time)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
