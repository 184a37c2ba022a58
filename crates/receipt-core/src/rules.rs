//! # Points Rules
//!
//! The seven independent rules that turn a receipt into reward points.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                   Input              Points                       │
//! │  ────────────────────   ────────────────   ──────────────────────────   │
//! │  R1 retailer chars      retailer           1 per ASCII letter/digit     │
//! │  R2 round dollar        total              50 if no cents and > 0       │
//! │  R3 quarter multiple    total              25 if multiple of .25, > 0   │
//! │  R4 item pairs          item count         5 per two items              │
//! │  R5 description length  each item          ceil(price × 0.2) when the   │
//! │                                            trimmed length % 3 == 0      │
//! │  R6 odd day             purchaseDate       6 if day of month is odd     │
//! │  R7 afternoon window    purchaseTime       10 if 14:00 < t < 16:00      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each rule is a free function over already-parsed values so it can be
//! tested in isolation. [`score_receipt`] parses a [`Receipt`] once and
//! evaluates every rule exactly once, returning a [`PointsBreakdown`].

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::Receipt;

/// Bonus for a total with no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Bonus for a total that is a multiple of [`QUARTER`].
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Points per complete pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Bonus for an odd day of month.
pub const ODD_DAY_POINTS: u64 = 6;

/// Bonus for a purchase inside the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// 0.2 expressed in basis points.
pub const DESCRIPTION_RATE_BPS: u32 = 2000;

/// $0.25
pub const QUARTER: Money = Money::from_cents(25);

/// 14:00 and 16:00 as seconds from midnight.
const AFTERNOON_START_SECS: u32 = 14 * 3600;
const AFTERNOON_END_SECS: u32 = 16 * 3600;

// =============================================================================
// Individual Rules
// =============================================================================

/// R1: one point for every ASCII letter or digit in the retailer name.
///
/// ## Example
/// ```rust
/// use receipt_core::rules::retailer_points;
///
/// assert_eq!(retailer_points("M&M Corner Market"), 14);
/// ```
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// R2: 50 points if the total is a whole dollar amount greater than zero.
pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_positive() && total.is_whole_dollars() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// R3: 25 points if the total is a multiple of 0.25 greater than zero.
pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_positive() && total.is_multiple_of(QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// R4: 5 points for every two items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// R5: when the trimmed description length is a multiple of 3, the price
/// multiplied by 0.2 and rounded up; otherwise 0.
///
/// Length is counted in characters after stripping ASCII control characters
/// and spaces (anything up to U+0020) from both ends. Other Unicode
/// whitespace such as U+00A0 is kept. An empty description counts as a
/// multiple of 3.
///
/// ## Example
/// ```rust
/// use receipt_core::money::Money;
/// use receipt_core::rules::description_points;
///
/// // "Emils Cheese Pizza" is 18 characters; 12.25 × 0.2 = 2.45 → 3
/// assert_eq!(description_points("Emils Cheese Pizza", Money::from_cents(1225)), 3);
/// assert_eq!(description_points("Gatorade", Money::from_cents(225)), 0);
/// ```
pub fn description_points(description: &str, price: Money) -> u64 {
    let length = description.trim_matches(|c: char| c <= ' ').chars().count();
    if length % 3 != 0 {
        return 0;
    }
    // Prices are never negative once parsed
    price.ceil_dollars_at_rate(DESCRIPTION_RATE_BPS).max(0) as u64
}

/// R6: 6 points if the day of month is odd.
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// R7: 10 points if the time is strictly after 14:00 and strictly before 16:00.
///
/// ## Boundaries
/// ```text
///   14:00:00   14:00:01 ............ 15:59:59   16:00:00
///      0          10                    10          0
/// ```
pub fn afternoon_points(time: NaiveTime) -> u64 {
    let seconds = time.num_seconds_from_midnight();
    let after_start =
        seconds > AFTERNOON_START_SECS || (seconds == AFTERNOON_START_SECS && time.nanosecond() > 0);
    if after_start && seconds < AFTERNOON_END_SECS {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Per-rule points for one receipt.
///
/// `descriptions` holds one entry per item, in item order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: Vec<u64>,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of every rule's contribution.
    pub fn total(&self) -> u64 {
        self.retailer
            + self.round_dollar
            + self.quarter_multiple
            + self.item_pairs
            + self.afternoon
            + self.odd_day
            + self.descriptions.iter().sum::<u64>()
    }
}

/// Parses a receipt's fields and evaluates all seven rules once.
///
/// ## Errors
/// - `InvalidAmount` for a malformed total or any malformed item price
///   (named `total` or `items[i].price`)
/// - `InvalidFormat` for a malformed purchase date or time
///
/// Every price is parsed, including prices whose description length would
/// not earn points.
pub fn score_receipt(receipt: &Receipt) -> ValidationResult<PointsBreakdown> {
    let total = receipt.parse_total()?;
    let date = receipt.parse_date()?;
    let time = receipt.parse_time()?;

    let descriptions = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let price = item.parse_price(&format!("items[{index}].price"))?;
            Ok(description_points(&item.short_description, price))
        })
        .collect::<ValidationResult<Vec<u64>>>()?;

    Ok(PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: round_dollar_points(total),
        quarter_multiple: quarter_multiple_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        descriptions,
        odd_day: odd_day_points(date),
        afternoon: afternoon_points(time),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
