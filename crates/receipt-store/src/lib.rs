//! # receipt-store: In-Memory Receipt Store
//!
//! This crate owns every submitted receipt for the lifetime of the process
//! and is the single entry point for scoring.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Data Flow                         │
//! │                                                                         │
//! │  HTTP handler (POST /receipts/process, GET /receipts/{id}/points)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐                  │   │
//! │  │   │ ReceiptStore  │───►│ IdGenerator        │                  │   │
//! │  │   │ (store.rs)    │    │ (id.rs)            │                  │   │
//! │  │   │               │    │ UuidGenerator      │                  │   │
//! │  │   │ DashMap<id,   │    └────────────────────┘                  │   │
//! │  │   │   Receipt>    │                                             │   │
//! │  │   └───────┬───────┘                                             │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              │ score(id)                                                │
//! │              ▼                                                          │
//! │  receipt_core::rules::score_receipt                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The concurrent store and scoring entry point
//! - [`id`] - Identifier generation seam
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::{Item, Receipt};
//! use receipt_store::ReceiptStore;
//!
//! let store = ReceiptStore::new();
//! let id = store.submit(Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
//!     total: "6.49".to_string(),
//! });
//!
//! assert_eq!(store.score(&id).unwrap(), 6 + 6);
//! assert!(store.score("missing").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, UuidGenerator};
pub use store::ReceiptStore;
