//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - Malformed amount, date or time fields          │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Unknown receipt id, wrapped validation errors  │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What clients see ({ "error": message })        │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → Client                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field name in every message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt field parsing errors.
///
/// Receipts are stored exactly as submitted, so these surface when a
/// receipt is scored rather than when it is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A total or price is not a plain decimal amount.
    ///
    /// ## When This Occurs
    /// - Empty string, letters, signs or exponents (`"abc"`, `"-1.00"`, `"1e3"`)
    /// - More than two fractional digits (`"1.005"`)
    /// - Amount too large to hold in cents
    #[error("{field} is not a valid amount: '{value}'")]
    InvalidAmount { field: String, value: String },

    /// A purchase date or time is not in ISO form.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an InvalidAmount error for a field and its raw value.
    pub fn invalid_amount(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidAmount {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an InvalidFormat error for a field.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
