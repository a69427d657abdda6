//! # Snapshot File Operations
//!
//! Save, load, existence check, and backup for catalog snapshots.
//!
//! ## Load Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Load Check Sequence                                │
//! │                                                                         │
//! │  open file ────────────── missing ──────────► NotFound                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read 12-byte header ──── too short ────────► CorruptFile              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  version == 1? ────────── mismatch ─────────► VersionMismatch          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  0 <= count <= 500? ───── impossible ───────► CorruptFile              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read `count` records ─── short / garbage ──► CorruptFile              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  brand-new Catalog ── caller swaps it in wholesale                     │
//! │                                                                         │
//! │  A failed load returns an error and NOTHING else: the caller's         │
//! │  catalog is only replaced after every check has passed.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Saving writes in place, so a failure mid-write can leave a truncated
//! file behind (the version/count checks will refuse it on the next load).
//! TODO: write to a temp path and rename over the target so a failed save
//! cannot clobber the previous snapshot.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use stockroom_core::{Catalog, Product, MAX_PRODUCTS};

use crate::error::{PersistError, PersistResult};
use crate::format::{
    decode_header, decode_record, encode_header, encode_record, Header, FORMAT_VERSION,
    HEADER_SIZE, RECORD_SIZE,
};

/// Suffix appended to the snapshot path by [`backup`].
pub const BACKUP_SUFFIX: &str = ".backup";

// =============================================================================
// Save
// =============================================================================

/// Writes the catalog to `path`, overwriting any existing file.
///
/// The snapshot captures the exact store state: every record (active and
/// inactive, in insertion order) plus the code counter.
///
/// ## Errors
/// [`PersistError::Io`] when the file cannot be created or a write falls
/// short.
pub fn save(catalog: &Catalog, path: impl AsRef<Path>) -> PersistResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), records = catalog.len(), "saving catalog snapshot");

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let header = Header {
        version: FORMAT_VERSION,
        count: catalog.len() as i32,
        next_code: catalog.next_code(),
    };
    writer.write_all(&encode_header(&header))?;

    for product in catalog.products() {
        writer.write_all(&encode_record(product))?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        records = catalog.len(),
        next_code = catalog.next_code(),
        "catalog snapshot saved"
    );
    Ok(())
}

// =============================================================================
// Load
// =============================================================================

/// Reads a catalog back from `path`.
///
/// Returns a freshly built catalog; the caller replaces its own wholesale.
/// Because nothing is mutated until the whole file has decoded, a failed
/// load never leaves a half-replaced catalog behind.
///
/// ## Errors
/// - [`PersistError::NotFound`] when the file is absent
/// - [`PersistError::VersionMismatch`] for a foreign format version
/// - [`PersistError::CorruptFile`] for an impossible record count, a
///   truncated file, or undecodable record fields
pub fn load(path: impl AsRef<Path>) -> PersistResult<Catalog> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading catalog snapshot");

    let file = File::open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            warn!(path = %path.display(), "snapshot file not found");
            PersistError::not_found(path)
        } else {
            PersistError::Io(err)
        }
    })?;
    let mut reader = BufReader::new(file);

    let mut header_buf = [0u8; HEADER_SIZE];
    read_exact_or_corrupt(&mut reader, &mut header_buf, "file too short for header")?;
    let header = decode_header(&header_buf);

    if header.version != FORMAT_VERSION {
        warn!(found = header.version, "snapshot version mismatch");
        return Err(PersistError::VersionMismatch {
            found: header.version,
            expected: FORMAT_VERSION,
        });
    }

    if header.count < 0 || header.count as usize > MAX_PRODUCTS {
        return Err(PersistError::corrupt(format!(
            "header declares {} records, capacity is {}",
            header.count, MAX_PRODUCTS
        )));
    }

    let mut products: Vec<Product> = Vec::with_capacity(header.count as usize);
    let mut record_buf = [0u8; RECORD_SIZE];
    for _ in 0..header.count {
        read_exact_or_corrupt(
            &mut reader,
            &mut record_buf,
            "file ends before the declared record count",
        )?;
        products.push(decode_record(&record_buf)?);
    }

    info!(
        path = %path.display(),
        records = products.len(),
        next_code = header.next_code,
        "catalog snapshot loaded"
    );
    Ok(Catalog::from_parts(products, header.next_code))
}

/// `read_exact` that reports a premature end-of-file as file corruption
/// instead of a bare I/O error.
fn read_exact_or_corrupt(
    reader: &mut impl Read,
    buf: &mut [u8],
    reason: &str,
) -> PersistResult<()> {
    reader.read_exact(buf).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            PersistError::corrupt(reason)
        } else {
            PersistError::Io(err)
        }
    })
}

// =============================================================================
// Existence & Backup
// =============================================================================

/// Whether a snapshot file exists at `path`. Metadata check only; the
/// contents are not validated.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Copies the snapshot at `path` to `path + ".backup"`, silently
/// overwriting any prior backup. Returns the backup path.
///
/// ## Errors
/// - [`PersistError::NotFound`] when the source is absent
/// - [`PersistError::Io`] when the copy fails or falls short
pub fn backup(path: impl AsRef<Path>) -> PersistResult<PathBuf> {
    let path = path.as_ref();
    if !exists(path) {
        warn!(path = %path.display(), "no snapshot to back up");
        return Err(PersistError::not_found(path));
    }

    let backup_path = backup_path_for(path);
    fs::copy(path, &backup_path)?;

    info!(
        source = %path.display(),
        backup = %backup_path.display(),
        "snapshot backup created"
    );
    Ok(backup_path)
}

/// The path a backup of `path` lands at (`<path>.backup`).
fn backup_path_for(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(BACKUP_SUFFIX);
    PathBuf::from(os)
}

// =============================================================================
// Unit Tests
// =============================================================================
