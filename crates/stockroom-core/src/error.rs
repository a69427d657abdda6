//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CatalogError     - Store operation failures                       │
//! │  └── ValidationError  - Field rule rejections                          │
//! │                                                                         │
//! │  stockroom-persist errors (separate crate)                             │
//! │  └── PersistError     - Snapshot file failures                         │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → CLI message → user             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, code, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog store errors.
///
/// These represent failed store operations: a mutation rejected by a field
/// rule, a lookup that missed, or registration at capacity. They should be
/// caught and translated to user-friendly messages by the front-end.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No active record matches the code (or no inactive record, for
    /// reactivation). Inactive records are invisible to active-state lookups
    /// even when the code exists.
    #[error("Product not found: code {0}")]
    ProductNotFound(i32),

    /// Registration attempted with the catalog at its record ceiling.
    ///
    /// Soft-deleted records still occupy a slot, so a catalog full of
    /// inactive products is still full.
    #[error("Catalog is full: capacity of {max} products reached")]
    CapacityExhausted { max: usize },

    /// A field rule rejected the mutation (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Produced by the `validation` module when a field value breaks a domain
/// rule. Registration surfaces the first failing field; updates skip the
/// failing field and keep going.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field value is too short.
    #[error("{field} must be at least {min} bytes")]
    TooShort { field: &'static str, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} bytes")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value is outside its allowed band.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Price is outside the accepted currency band.
    #[error("price must be between {min} and {max}")]
    PriceOutOfRange { min: f64, max: f64 },

    /// Malformed value (bad leading character, too many decimals, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Minimum stock cannot exceed the on-hand quantity it guards.
    #[error("minimum stock {minimum} exceeds current quantity {quantity}")]
    MinimumAboveQuantity { minimum: i32, quantity: i32 },

    /// Category or unit code outside the enumerated 1..=5 band.
    #[error("{field} code {code} is not a known value")]
    UnknownCode { field: &'static str, code: i32 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
