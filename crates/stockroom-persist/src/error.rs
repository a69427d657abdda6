//! # Persistence Error Types
//!
//! Error types for snapshot file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  OS error (std::io::Error)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PersistError (this module) ← adds corruption/version categorization   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI displays a user-friendly message; the in-memory catalog is        │
//! │  untouched by any failed load                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The snapshot (or backup source) file does not exist.
    #[error("Snapshot file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The header's format version differs from this codec's version.
    /// There is no migration path; the load is rejected outright.
    #[error("Incompatible snapshot version {found} (expected {expected})")]
    VersionMismatch { found: i32, expected: i32 },

    /// The file's contents cannot be a catalog this codec wrote: impossible
    /// record count, truncated data, undecodable record fields.
    #[error("Corrupt snapshot: {reason}")]
    CorruptFile { reason: String },

    /// Underlying I/O failure (open, read, write, copy).
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PersistError {
    /// Creates a NotFound error for the given path.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        PersistError::NotFound { path: path.into() }
    }

    /// Creates a CorruptFile error with the given reason.
    pub fn corrupt(reason: impl Into<String>) -> Self {
        PersistError::CorruptFile {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with PersistError.
pub type PersistResult<T> = Result<T, PersistError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PersistError::VersionMismatch {
            found: 2,
            expected: 1,
        };
        assert_eq!(
            err.to_string(),
            "Incompatible snapshot version 2 (expected 1)"
        );

        let err = PersistError::corrupt("header declares 501 records, capacity is 500");
        assert_eq!(
            err.to_string(),
            "Corrupt snapshot: header declares 501 records, capacity is 500"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PersistError = io.into();
        assert!(matches!(err, PersistError::Io(_)));
    }
}
