//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the whole inventory
//! domain as pure, synchronous functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (terminal menu)                     │   │
//! │  │    register ──► find ──► update ──► reports ──► save/load      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  Catalog  │  │   rules   │  │   │
//! │  │   │ Category  │  │  (cents)  │  │   CRUD    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILE SYSTEM • NO TERMINAL • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              stockroom-persist (snapshot codec)                 │   │
//! │  │         flat binary file: header + fixed-size records           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Unit)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The bounded in-memory product store
//! - [`validation`] - Field validation rules gating every mutation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, terminal, network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::catalog::{Catalog, ProductDraft};
//!
//! let mut catalog = Catalog::new();
//! let code = catalog
//!     .register(&ProductDraft {
//!         name: "Arroz 5kg".to_string(),
//!         price: 25.99,
//!         quantity: 50,
//!         minimum_stock: 10,
//!         category: 1, // Food
//!         unit: 2,     // Kilogram
//!     })
//!     .unwrap();
//!
//! assert_eq!(code, 1);
//! assert_eq!(catalog.count_active(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Catalog` instead of
// `use stockroom_core::catalog::Catalog`

pub use catalog::{Catalog, ProductDraft, ProductPatch};
pub use error::{CatalogError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of records a catalog holds by default (active + inactive).
///
/// Registration fails once the ceiling is reached; soft-deleted records still
/// count because they are never physically removed.
pub const MAX_PRODUCTS: usize = 500;

/// Product name length lower bound, in bytes.
pub const NAME_MIN_BYTES: usize = 2;

/// Product name length upper bound, in bytes.
///
/// Matches the fixed 64-byte name field of the snapshot format
/// (63 content bytes + NUL padding).
pub const NAME_MAX_BYTES: usize = 63;

/// Lowest price accepted for a product, in currency units.
pub const MIN_PRICE: f64 = 0.01;

/// Highest price accepted for a product, in currency units.
pub const MAX_PRICE: f64 = 9999.99;

/// Lowest valid product code.
pub const MIN_CODE: i32 = 1;

/// Highest valid product code (six digits).
pub const MAX_CODE: i32 = 999_999;

/// Maximum on-hand quantity for a single product.
pub const MAX_QUANTITY: i32 = 999_999;
