//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │      Unit       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (i32)     │   │  Food     = 1   │   │  Piece      = 1 │       │
//! │  │  name           │   │  Drink    = 2   │   │  Kilogram   = 2 │       │
//! │  │  price_cents    │   │  Hygiene  = 3   │   │  Gram       = 3 │       │
//! │  │  quantity       │   │  Cleaning = 4   │   │  Liter      = 4 │       │
//! │  │  minimum_stock  │   │  Others   = 5   │   │  Milliliter = 5 │       │
//! │  │  is_active      │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Category and Unit travel as 1..=5 integer codes on the wire and at    │
//! │  the input boundary; inside the store they are always the enums.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category, encoded 1..=5 at the boundary and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food = 1,
    Drink = 2,
    Hygiene = 3,
    Cleaning = 4,
    Others = 5,
}

impl Category {
    /// All categories in code order, for menu listings.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Drink,
        Category::Hygiene,
        Category::Cleaning,
        Category::Others,
    ];

    /// Decodes a 1..=5 integer code. Returns `None` outside the band.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Category::Food),
            2 => Some(Category::Drink),
            3 => Some(Category::Hygiene),
            4 => Some(Category::Cleaning),
            5 => Some(Category::Others),
            _ => None,
        }
    }

    /// Returns the integer code for this category.
    #[inline]
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    /// Display label for listings and receipts.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Drink => "Drink",
            Category::Hygiene => "Hygiene",
            Category::Cleaning => "Cleaning",
            Category::Others => "Others",
        }
    }
}

/// Maps a raw category code to its label.
///
/// Unknown codes map to `"Unknown"` rather than failing - this is a display
/// helper, not a validator.
pub fn category_label(code: i32) -> &'static str {
    match Category::from_code(code) {
        Some(category) => category.label(),
        None => "Unknown",
    }
}

// =============================================================================
// Unit
// =============================================================================

/// Unit of measure, encoded 1..=5 at the boundary and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Piece = 1,
    Kilogram = 2,
    Gram = 3,
    Liter = 4,
    Milliliter = 5,
}

impl Unit {
    /// All units in code order, for menu listings.
    pub const ALL: [Unit; 5] = [
        Unit::Piece,
        Unit::Kilogram,
        Unit::Gram,
        Unit::Liter,
        Unit::Milliliter,
    ];

    /// Decodes a 1..=5 integer code. Returns `None` outside the band.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Unit::Piece),
            2 => Some(Unit::Kilogram),
            3 => Some(Unit::Gram),
            4 => Some(Unit::Liter),
            5 => Some(Unit::Milliliter),
            _ => None,
        }
    }

    /// Returns the integer code for this unit.
    #[inline]
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    /// Short display label (abbreviated, as printed next to quantities).
    pub const fn label(&self) -> &'static str {
        match self {
            Unit::Piece => "pc",
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Liter => "L",
            Unit::Milliliter => "mL",
        }
    }
}

/// Maps a raw unit code to its label; unknown codes map to `"Unknown"`.
pub fn unit_label(code: i32) -> &'static str {
    match Unit::from_code(code) {
        Some(unit) => unit.label(),
        None => "Unknown",
    }
}

// =============================================================================
// Product
// =============================================================================

/// One catalog entry.
///
/// Created only through a successful [`Catalog::register`] call, never by
/// hand, so a `Product` always satisfies the validation rules it was last
/// written under. Soft deletion toggles `is_active`; the record itself is
/// retained and its code is never reissued.
///
/// [`Catalog::register`]: crate::catalog::Catalog::register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique store-assigned code, immutable after creation.
    pub code: i32,

    /// Display name, UTF-8, 2..=63 bytes.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// On-hand stock.
    pub quantity: i32,

    /// Reorder threshold; never exceeds `quantity` at the moment it is set.
    pub minimum_stock: i32,

    /// Product category.
    pub category: Category,

    /// Unit of measure.
    pub unit: Unit,

    /// Whether the product is active (soft delete flag).
    pub is_active: bool,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Value of the on-hand stock for this product (price × quantity).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity as i64)
    }

    /// Whether the product needs replenishment (quantity at or below the
    /// reorder threshold).
    #[inline]
    pub fn is_below_minimum(&self) -> bool {
        self.quantity <= self.minimum_stock
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code(0), None);
        assert_eq!(Category::from_code(6), None);
    }

    #[test]
    fn test_unit_codes_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_code(unit.code()), Some(unit));
        }
        assert_eq!(Unit::from_code(-1), None);
        assert_eq!(Unit::from_code(6), None);
    }

    #[test]
    fn test_labels_fall_back_to_unknown() {
        assert_eq!(category_label(1), "Food");
        assert_eq!(category_label(99), "Unknown");
        assert_eq!(unit_label(2), "kg");
        assert_eq!(unit_label(0), "Unknown");
    }

    #[test]
    fn test_stock_value() {
        let product = Product {
            code: 1,
            name: "Arroz".to_string(),
            price_cents: 2599,
            quantity: 50,
            minimum_stock: 10,
            category: Category::Food,
            unit: Unit::Kilogram,
            is_active: true,
        };
        assert_eq!(product.stock_value().cents(), 2599 * 50);
        assert!(!product.is_below_minimum());
    }
}
