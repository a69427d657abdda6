//! # Snapshot Wire Format
//!
//! The bit-exact binary layout of a catalog snapshot. Pure byte twiddling -
//! all file I/O lives in [`snapshot`](crate::snapshot).
//!
//! ## Layout (native byte order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Snapshot File Layout                                │
//! │                                                                         │
//! │  HEADER - 12 bytes                                                      │
//! │  ┌────────────┬────────────┬────────────┐                              │
//! │  │ version    │ count      │ next_code  │   3 × i32                    │
//! │  │ bytes 0-3  │ bytes 4-7  │ bytes 8-11 │                              │
//! │  └────────────┴────────────┴────────────┘                              │
//! │                                                                         │
//! │  RECORD - 92 bytes, repeated `count` times                              │
//! │  ┌────────┬──────────────────┬────────┬────────┬────────┬──────┬──────┬────────┐
//! │  │ code   │ name             │ price  │ qty    │ min    │ cat  │ unit │ active │
//! │  │ i32    │ 64 B, NUL-padded │ f32    │ i32    │ i32    │ i32  │ i32  │ i32    │
//! │  │ 0-3    │ 4-67             │ 68-71  │ 72-75  │ 76-79  │80-83 │84-87 │ 88-91  │
//! │  └────────┴──────────────────┴────────┴────────┴────────┴──────┴──────┴────────┘
//! │                                                                         │
//! │  Every field is 4-byte aligned and the name field is a multiple of 4,  │
//! │  so the layout carries no padding at all.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Price crosses the wire as an f32 decimal amount. Catalog prices are
//! capped at 9999.99, so the cent count fits f32's 24-bit integer range
//! exactly and the cents ⇄ f32 crossing is lossless in both directions.

use stockroom_core::{Category, Money, Product, Unit};

use crate::error::{PersistError, PersistResult};

// =============================================================================
// Layout Constants
// =============================================================================

/// Current snapshot format version. Any other value in a file header is a
/// hard load failure - there is no migration.
pub const FORMAT_VERSION: i32 = 1;

/// Header size in bytes: version, count, next_code as i32.
pub const HEADER_SIZE: usize = 12;

/// Fixed name field size in bytes (63 content bytes + NUL padding).
pub const NAME_FIELD_SIZE: usize = 64;

/// Fixed record size in bytes.
pub const RECORD_SIZE: usize = 92;

// =============================================================================
// Header
// =============================================================================

/// Snapshot file header: format version plus the two counters needed to
/// rebuild the catalog wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: i32,
    pub count: i32,
    pub next_code: i32,
}

/// Encodes a header into its 12-byte wire form.
pub fn encode_header(header: &Header) -> [u8; HEADER_SIZE] {
    let mut buf = [0u8; HEADER_SIZE];
    buf[0..4].copy_from_slice(&header.version.to_ne_bytes());
    buf[4..8].copy_from_slice(&header.count.to_ne_bytes());
    buf[8..12].copy_from_slice(&header.next_code.to_ne_bytes());
    buf
}

/// Decodes a 12-byte header. Field plausibility (version, count bounds) is
/// the loader's business, not the codec's.
pub fn decode_header(buf: &[u8; HEADER_SIZE]) -> Header {
    Header {
        version: read_i32(buf, 0),
        count: read_i32(buf, 4),
        next_code: read_i32(buf, 8),
    }
}

// =============================================================================
// Record
// =============================================================================

/// Encodes one product into its 92-byte wire form.
///
/// The name is written as raw UTF-8 bytes with NUL padding; validation caps
/// names at 63 bytes, so the content always fits with a terminator to spare.
pub fn encode_record(product: &Product) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];

    buf[0..4].copy_from_slice(&product.code.to_ne_bytes());

    let name_bytes = product.name.as_bytes();
    let len = name_bytes.len().min(NAME_FIELD_SIZE - 1);
    buf[4..4 + len].copy_from_slice(&name_bytes[..len]);

    let price = product.price().to_decimal() as f32;
    buf[68..72].copy_from_slice(&price.to_ne_bytes());

    buf[72..76].copy_from_slice(&product.quantity.to_ne_bytes());
    buf[76..80].copy_from_slice(&product.minimum_stock.to_ne_bytes());
    buf[80..84].copy_from_slice(&product.category.code().to_ne_bytes());
    buf[84..88].copy_from_slice(&product.unit.code().to_ne_bytes());

    let active: i32 = if product.is_active { 1 } else { 0 };
    buf[88..92].copy_from_slice(&active.to_ne_bytes());

    buf
}

/// Decodes one 92-byte record.
///
/// ## Errors
/// [`PersistError::CorruptFile`] when the name bytes are not UTF-8 or the
/// category/unit codes fall outside 1..=5 - neither can appear in a file
/// this codec wrote.
pub fn decode_record(buf: &[u8; RECORD_SIZE]) -> PersistResult<Product> {
    let code = read_i32(buf, 0);

    let name_field = &buf[4..4 + NAME_FIELD_SIZE];
    let content_len = name_field
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(NAME_FIELD_SIZE);
    let name = std::str::from_utf8(&name_field[..content_len])
        .map_err(|_| PersistError::corrupt("record name is not valid UTF-8"))?
        .to_string();

    let price = f32::from_ne_bytes([buf[68], buf[69], buf[70], buf[71]]);
    let price_cents = Money::from_decimal(price as f64).cents();

    let quantity = read_i32(buf, 72);
    let minimum_stock = read_i32(buf, 76);

    let category_code = read_i32(buf, 80);
    let category = Category::from_code(category_code).ok_or_else(|| {
        PersistError::corrupt(format!("unknown category code {category_code}"))
    })?;

    let unit_code = read_i32(buf, 84);
    let unit = Unit::from_code(unit_code)
        .ok_or_else(|| PersistError::corrupt(format!("unknown unit code {unit_code}")))?;

    let is_active = read_i32(buf, 88) != 0;

    Ok(Product {
        code,
        name,
        price_cents,
        quantity,
        minimum_stock,
        category,
        unit,
        is_active,
    })
}

#[inline]
fn read_i32(buf: &[u8], offset: usize) -> i32 {
    i32::from_ne_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            code: 7,
            name: "Arroz 5kg".to_string(),
            price_cents: 2599,
            quantity: 50,
            minimum_stock: 10,
            category: Category::Food,
            unit: Unit::Kilogram,
            is_active: true,
        }
    }

    #[test]
    fn test_header_layout_is_three_native_i32() {
        let header = Header {
            version: 1,
            count: 2,
            next_code: 3,
        };
        let buf = encode_header(&header);

        assert_eq!(buf.len(), 12);
        assert_eq!(&buf[0..4], &1_i32.to_ne_bytes());
        assert_eq!(&buf[4..8], &2_i32.to_ne_bytes());
        assert_eq!(&buf[8..12], &3_i32.to_ne_bytes());

        assert_eq!(decode_header(&buf), header);
    }

    #[test]
    fn test_record_layout_offsets() {
        let buf = encode_record(&sample_product());

        assert_eq!(buf.len(), 92);
        assert_eq!(&buf[0..4], &7_i32.to_ne_bytes());
        assert_eq!(&buf[4..13], b"Arroz 5kg");
        // NUL padding runs to the end of the name field
        assert!(buf[13..68].iter().all(|&b| b == 0));
        assert_eq!(&buf[68..72], &25.99_f32.to_ne_bytes());
        assert_eq!(&buf[72..76], &50_i32.to_ne_bytes());
        assert_eq!(&buf[76..80], &10_i32.to_ne_bytes());
        assert_eq!(&buf[80..84], &1_i32.to_ne_bytes());
        assert_eq!(&buf[84..88], &2_i32.to_ne_bytes());
        assert_eq!(&buf[88..92], &1_i32.to_ne_bytes());
    }

    #[test]
    fn test_record_round_trip() {
        let product = sample_product();
        let decoded = decode_record(&encode_record(&product)).unwrap();
        assert_eq!(decoded, product);
    }

    #[test]
    fn test_record_round_trip_inactive_and_accented() {
        let product = Product {
            code: 42,
            name: "Pão-de-açúcar".to_string(),
            price_cents: 1,
            quantity: 0,
            minimum_stock: 0,
            category: Category::Others,
            unit: Unit::Gram,
            is_active: false,
        };
        let decoded = decode_record(&encode_record(&product)).unwrap();
        assert_eq!(decoded, product);
    }

    #[test]
    fn test_price_cents_cross_the_wire_exactly() {
        // Cent counts across the whole accepted band survive the f32 crossing
        for cents in [1_i64, 99, 100, 2599, 750, 999_998, 999_999] {
            let mut product = sample_product();
            product.price_cents = cents;
            let decoded = decode_record(&encode_record(&product)).unwrap();
            assert_eq!(decoded.price_cents, cents, "cents {cents} drifted");
        }
    }

    #[test]
    fn test_name_at_max_length_round_trips() {
        let mut product = sample_product();
        product.name = format!("A{}", "b".repeat(62)); // 63 bytes
        let decoded = decode_record(&encode_record(&product)).unwrap();
        assert_eq!(decoded.name, product.name);
    }

    #[test]
    fn test_decode_rejects_unknown_category() {
        let mut buf = encode_record(&sample_product());
        buf[80..84].copy_from_slice(&9_i32.to_ne_bytes());

        let err = decode_record(&buf).unwrap_err();
        assert!(matches!(err, PersistError::CorruptFile { .. }));
    }

    #[test]
    fn test_decode_rejects_unknown_unit() {
        let mut buf = encode_record(&sample_product());
        buf[84..88].copy_from_slice(&0_i32.to_ne_bytes());

        assert!(decode_record(&buf).is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_utf8_name() {
        let mut buf = encode_record(&sample_product());
        buf[4] = 0xFF;
        buf[5] = 0xFE;

        let err = decode_record(&buf).unwrap_err();
        assert!(matches!(err, PersistError::CorruptFile { .. }));
    }

    #[test]
    fn test_decode_nonzero_active_flag_is_active() {
        // Any nonzero flag decodes as active, matching the integer-boolean
        // wire convention
        let mut product = sample_product();
        product.is_active = true;
        let mut buf = encode_record(&product);
        buf[88..92].copy_from_slice(&7_i32.to_ne_bytes());

        assert!(decode_record(&buf).unwrap().is_active);
    }
}
