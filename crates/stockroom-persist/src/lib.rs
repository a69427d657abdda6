//! # stockroom-persist: Snapshot Persistence for Stockroom
//!
//! This crate writes the in-memory catalog to a flat binary file and reads
//! it back, byte-for-byte faithful.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Data Flow                               │
//! │                                                                         │
//! │  CLI handler (save / reload / backup)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                stockroom-persist (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐           ┌────────────────────────────┐  │   │
//! │  │   │   snapshot     │           │          format            │  │   │
//! │  │   │  save / load   │──────────►│  header: 3 × i32 (12 B)    │  │   │
//! │  │   │ exists / backup│           │  record: fixed 92 B        │  │   │
//! │  │   └────────────────┘           └────────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    data/products.dat                            │   │
//! │  │   [version|count|next_code][record 0][record 1]...              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`format`] - The bit-exact wire layout (encode/decode, no I/O)
//! - [`snapshot`] - File operations: save, load, exists, backup
//! - [`error`] - Persistence error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockroom_core::Catalog;
//! use stockroom_persist::snapshot;
//!
//! let catalog = Catalog::new();
//! snapshot::save(&catalog, "data/products.dat")?;
//!
//! let restored = snapshot::load("data/products.dat")?;
//! assert_eq!(restored.next_code(), catalog.next_code());
//! # Ok::<(), stockroom_persist::PersistError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{PersistError, PersistResult};
pub use format::FORMAT_VERSION;
