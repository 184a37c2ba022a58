//! # receipt-core: Pure Scoring Logic for the Receipt Processor
//!
//! This crate is the **heart** of the receipt processor. It contains the
//! receipt data model and the points rules as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    receipt-store                                │   │
//! │  │    submit(receipt) -> id        score(id) -> points             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation │  │   rules   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  parsing   │  │  R1..R7   │  │   │
//! │  │   │   Item    │  │           │  │            │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt and Item as submitted
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Parsing of totals, prices, dates and times
//! - [`rules`] - The seven points rules and the per-receipt breakdown
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every rule is deterministic - same input = same output
//! 2. **No I/O**: Storage, network and logging live in other crates
//! 3. **Integer Money**: All amounts are in cents (i64) so multiple-of checks are exact
//! 4. **Explicit Errors**: Malformed fields surface as typed errors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{rules, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! let breakdown = rules::score_receipt(&receipt).unwrap();
//! assert_eq!(breakdown.total(), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use rules::PointsBreakdown;
pub use types::{Item, Receipt};
