//! # Catalog Store
//!
//! The bounded in-memory product store: CRUD, queries, and reports.
//!
//! ## Store Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Lifecycle                                │
//! │                                                                         │
//! │  register ──► validate every field ──► append ACTIVE record            │
//! │                     │                        │                          │
//! │                     │ any rule fails         │ code = next_code++       │
//! │                     ▼                        ▼                          │
//! │               no mutation            insertion order kept forever      │
//! │                                                                         │
//! │  deactivate ──► is_active = false   (record retained, code retired)    │
//! │  activate ────► is_active = true    (only an INACTIVE match counts)    │
//! │                                                                         │
//! │  Codes are NEVER reused: next_code only moves forward, even after      │
//! │  soft deletes, even after a wholesale reload from disk.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is an explicit value owned by the caller and passed by
//! reference into every operation - there is no process-wide instance.
//! All operations are synchronous and O(n) linear scans.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, Product, Unit};
use crate::validation::{
    validate_minimum_stock, validate_name, validate_price, validate_quantity,
};
use crate::MAX_PRODUCTS;

// =============================================================================
// Input Shapes
// =============================================================================

/// Field values for a registration, as gathered from the outside world.
///
/// Category and unit travel as raw 1..=5 codes so the store owns the whole
/// validation chain; the enums are constructed only after their codes pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    /// Decimal currency amount; converted to cents after validation.
    pub price: f64,
    pub quantity: i32,
    pub minimum_stock: i32,
    /// Raw category code (1..=5).
    pub category: i32,
    /// Raw unit-of-measure code (1..=5).
    pub unit: i32,
}

/// A per-field patch for [`Catalog::update`].
///
/// `None` fields are untouched. `Some` fields are applied independently and
/// only if their own validation passes - a failing field is silently left
/// unchanged while the rest of the patch still goes through (best-effort
/// update, not all-or-nothing).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub minimum_stock: Option<i32>,
    pub category: Option<i32>,
    pub unit: Option<i32>,
}

// =============================================================================
// Catalog
// =============================================================================

/// The bounded collection of product records plus the code counter.
///
/// ## Invariants
/// - `products.len() <= capacity`
/// - insertion order equals registration order (soft deletes never compact)
/// - `next_code` is `1 + the highest code ever assigned` and never moves
///   backwards
/// - every record satisfied the validation rules at the moment it was last
///   written (gate-on-write; records are not re-checked spontaneously)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    next_code: i32,
    capacity: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

impl Catalog {
    /// Creates an empty catalog with the default capacity of
    /// [`MAX_PRODUCTS`] records.
    pub fn new() -> Self {
        Catalog::with_capacity(MAX_PRODUCTS)
    }

    /// Creates an empty catalog with a custom record ceiling.
    pub fn with_capacity(capacity: usize) -> Self {
        Catalog {
            products: Vec::new(),
            next_code: 1,
            capacity,
        }
    }

    /// Rebuilds a catalog wholesale from previously stored parts.
    ///
    /// Used by the persistence layer after decoding a snapshot. The records
    /// are trusted to have been produced by a catalog (validation is
    /// gate-on-write, and these fields passed their gates when written).
    pub fn from_parts(products: Vec<Product>, next_code: i32) -> Self {
        let capacity = MAX_PRODUCTS.max(products.len());
        Catalog {
            products,
            next_code,
            capacity,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All records in insertion order, active and inactive alike.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of records, active and inactive alike.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no records at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The code the next successful registration will be assigned.
    #[inline]
    pub fn next_code(&self) -> i32 {
        self.next_code
    }

    /// The record ceiling enforced at registration time.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Registers a new product.
    ///
    /// Every field is checked, first failure short-circuits with no
    /// mutation. On success the record is appended active, the assigned code
    /// is returned, and `next_code` advances by exactly one.
    ///
    /// ## Errors
    /// - [`CatalogError::CapacityExhausted`] at the record ceiling
    /// - [`CatalogError::Validation`] for the first failing field
    pub fn register(&mut self, draft: &ProductDraft) -> CatalogResult<i32> {
        if self.products.len() >= self.capacity {
            return Err(CatalogError::CapacityExhausted { max: self.capacity });
        }

        validate_name(&draft.name)?;
        validate_price(draft.price)?;
        validate_quantity(draft.quantity)?;
        validate_minimum_stock(draft.minimum_stock, draft.quantity)?;
        let category =
            Category::from_code(draft.category).ok_or(ValidationError::UnknownCode {
                field: "category",
                code: draft.category,
            })?;
        let unit = Unit::from_code(draft.unit).ok_or(ValidationError::UnknownCode {
            field: "unit",
            code: draft.unit,
        })?;

        let code = self.next_code;
        self.next_code += 1;
        self.products.push(Product {
            code,
            name: draft.name.clone(),
            price_cents: Money::from_decimal(draft.price).cents(),
            quantity: draft.quantity,
            minimum_stock: draft.minimum_stock,
            category,
            unit,
            is_active: true,
        });

        Ok(code)
    }

    /// Finds the active record with the given code.
    ///
    /// Inactive records are invisible here even when the code matches;
    /// a soft-deleted product looks exactly like a missing one.
    pub fn find_by_code(&self, code: i32) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.is_active && p.code == code)
    }

    /// Finds the first active record whose name contains `query`,
    /// case-insensitively.
    ///
    /// Empty queries match nothing.
    pub fn find_by_name(&self, query: &str) -> Option<&Product> {
        if query.is_empty() {
            return None;
        }
        let needle = query.to_lowercase();
        self.products
            .iter()
            .find(|p| p.is_active && p.name.to_lowercase().contains(&needle))
    }

    /// Whether any record - active or inactive - carries the code.
    pub fn exists(&self, code: i32) -> bool {
        self.products.iter().any(|p| p.code == code)
    }

    /// Applies a per-field patch to the active record with the given code.
    ///
    /// Fields failing their own validation are silently skipped; the rest of
    /// the patch is still applied. The minimum-stock rule is checked against
    /// the record's effective quantity, i.e. after the patch's quantity
    /// field has been applied or skipped. The code itself is immutable.
    ///
    /// ## Errors
    /// - [`CatalogError::ProductNotFound`] when no active record matches
    pub fn update(&mut self, code: i32, patch: &ProductPatch) -> CatalogResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.is_active && p.code == code)
            .ok_or(CatalogError::ProductNotFound(code))?;

        if let Some(name) = &patch.name {
            if validate_name(name).is_ok() {
                product.name = name.clone();
            }
        }
        if let Some(price) = patch.price {
            if validate_price(price).is_ok() {
                product.price_cents = Money::from_decimal(price).cents();
            }
        }
        if let Some(quantity) = patch.quantity {
            if validate_quantity(quantity).is_ok() {
                product.quantity = quantity;
            }
        }
        if let Some(minimum_stock) = patch.minimum_stock {
            if validate_minimum_stock(minimum_stock, product.quantity).is_ok() {
                product.minimum_stock = minimum_stock;
            }
        }
        if let Some(category_code) = patch.category {
            if let Some(category) = Category::from_code(category_code) {
                product.category = category;
            }
        }
        if let Some(unit_code) = patch.unit {
            if let Some(unit) = Unit::from_code(unit_code) {
                product.unit = unit;
            }
        }

        Ok(())
    }

    /// Soft-deletes the active record with the given code.
    ///
    /// The record is retained, its code stays retired, and it disappears
    /// from every active-state query until reactivated.
    pub fn deactivate(&mut self, code: i32) -> CatalogResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.is_active && p.code == code)
            .ok_or(CatalogError::ProductNotFound(code))?;
        product.is_active = false;
        Ok(())
    }

    /// Restores a soft-deleted record.
    ///
    /// Only an INACTIVE record with the code counts as a match; asking to
    /// restore an already-active product is a miss, not a no-op success.
    pub fn activate(&mut self, code: i32) -> CatalogResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| !p.is_active && p.code == code)
            .ok_or(CatalogError::ProductNotFound(code))?;
        product.is_active = true;
        Ok(())
    }

    // =========================================================================
    // Queries & Reports
    // =========================================================================

    /// Active records in insertion order, truncated at `limit`.
    pub fn list_active(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_active)
            .take(limit)
            .collect()
    }

    /// Active records needing replenishment (`quantity <= minimum_stock`),
    /// insertion order, truncated at `limit`.
    pub fn list_below_minimum(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_active && p.is_below_minimum())
            .take(limit)
            .collect()
    }

    /// Active records of one category, insertion order, truncated at
    /// `limit`.
    pub fn list_by_category(&self, category: Category, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_active && p.category == category)
            .take(limit)
            .collect()
    }

    /// Number of active records.
    pub fn count_active(&self) -> usize {
        self.products.iter().filter(|p| p.is_active).count()
    }

    /// Total value of the on-hand stock: Σ price × quantity over active
    /// records, in exact integer cents.
    pub fn total_stock_value(&self) -> Money {
        self.products
            .iter()
            .filter(|p| p.is_active)
            .fold(Money::zero(), |acc, p| acc + p.stock_value())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64, quantity: i32, minimum_stock: i32) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            quantity,
            minimum_stock,
            category: Category::Food.code(),
            unit: Unit::Kilogram.code(),
        }
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.next_code(), 1);
        assert_eq!(catalog.capacity(), MAX_PRODUCTS);
    }

    #[test]
    fn test_register_successful() {
        let mut catalog = Catalog::new();

        let code = catalog.register(&draft("Arroz 5kg", 25.99, 50, 10)).unwrap();

        assert_eq!(code, 1);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.next_code(), 2);
        assert_eq!(catalog.count_active(), 1);

        let product = catalog.find_by_code(1).unwrap();
        assert_eq!(product.name, "Arroz 5kg");
        assert_eq!(product.price_cents, 2599);
        assert!(product.is_active);
    }

    #[test]
    fn test_register_returns_sequential_codes() {
        let mut catalog = Catalog::new();

        for expected in 1..=5 {
            let before = catalog.next_code();
            let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();
            assert_eq!(code, before);
            assert_eq!(code, expected);
            assert_eq!(catalog.next_code(), before + 1);
        }
    }

    #[test]
    fn test_register_rejects_invalid_name() {
        let mut catalog = Catalog::new();

        let result = catalog.register(&draft("1Produto", 25.99, 50, 10));

        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.next_code(), 1);
    }

    #[test]
    fn test_register_rejects_invalid_price() {
        let mut catalog = Catalog::new();

        assert!(catalog.register(&draft("Arroz", -5.00, 50, 10)).is_err());
        assert!(catalog.register(&draft("Arroz", 19.999, 50, 10)).is_err());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_register_rejects_minimum_above_quantity() {
        let mut catalog = Catalog::new();

        let result = catalog.register(&draft("Feijao", 15.50, 5, 10));

        assert!(matches!(
            result,
            Err(CatalogError::Validation(
                ValidationError::MinimumAboveQuantity { .. }
            ))
        ));
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_register_rejects_unknown_category_and_unit() {
        let mut catalog = Catalog::new();

        let mut bad_category = draft("Arroz", 25.99, 50, 10);
        bad_category.category = 10;
        assert!(catalog.register(&bad_category).is_err());

        let mut bad_unit = draft("Arroz", 25.99, 50, 10);
        bad_unit.unit = 0;
        assert!(catalog.register(&bad_unit).is_err());

        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_register_at_capacity_fails_without_mutation() {
        let mut catalog = Catalog::with_capacity(2);

        catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();
        catalog.register(&draft("Feijao", 15.50, 20, 10)).unwrap();

        let result = catalog.register(&draft("Milho", 9.99, 30, 5));

        assert!(matches!(
            result,
            Err(CatalogError::CapacityExhausted { max: 2 })
        ));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.next_code(), 3);
    }

    #[test]
    fn test_deactivated_slot_still_counts_toward_capacity() {
        let mut catalog = Catalog::with_capacity(1);

        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();
        catalog.deactivate(code).unwrap();

        assert!(catalog.register(&draft("Feijao", 15.50, 20, 10)).is_err());
    }

    #[test]
    fn test_find_by_code_ignores_inactive() {
        let mut catalog = Catalog::new();
        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();

        assert!(catalog.find_by_code(code).is_some());

        catalog.deactivate(code).unwrap();

        // The code still exists in the store, but the active-state lookup
        // must not see it
        assert!(catalog.find_by_code(code).is_none());
        assert!(catalog.exists(code));
    }

    #[test]
    fn test_find_by_name_case_insensitive_substring() {
        let mut catalog = Catalog::new();
        catalog.register(&draft("Arroz Integral", 25.99, 50, 10)).unwrap();
        let code = catalog.register(&draft("Refrigerante", 7.50, 100, 20)).unwrap();

        assert_eq!(catalog.find_by_name("refri").unwrap().code, code);
        assert_eq!(catalog.find_by_name("INTEGRAL").unwrap().code, 1);
        assert!(catalog.find_by_name("acucar").is_none());
        assert!(catalog.find_by_name("").is_none());

        catalog.deactivate(code).unwrap();
        assert!(catalog.find_by_name("refri").is_none());
    }

    #[test]
    fn test_update_applies_valid_fields() {
        let mut catalog = Catalog::new();
        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();

        let patch = ProductPatch {
            name: Some("Arroz Integral".to_string()),
            price: Some(29.90),
            quantity: Some(40),
            minimum_stock: Some(15),
            category: Some(Category::Others.code()),
            unit: Some(Unit::Piece.code()),
        };
        catalog.update(code, &patch).unwrap();

        let product = catalog.find_by_code(code).unwrap();
        assert_eq!(product.name, "Arroz Integral");
        assert_eq!(product.price_cents, 2990);
        assert_eq!(product.quantity, 40);
        assert_eq!(product.minimum_stock, 15);
        assert_eq!(product.category, Category::Others);
        assert_eq!(product.unit, Unit::Piece);
        assert_eq!(product.code, code);
    }

    #[test]
    fn test_update_skips_invalid_fields_silently() {
        let mut catalog = Catalog::new();
        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();

        // Price has three decimals (skipped), quantity is valid (applied)
        let patch = ProductPatch {
            price: Some(19.999),
            quantity: Some(30),
            ..ProductPatch::default()
        };
        catalog.update(code, &patch).unwrap();

        let product = catalog.find_by_code(code).unwrap();
        assert_eq!(product.price_cents, 2599);
        assert_eq!(product.quantity, 30);
    }

    #[test]
    fn test_update_minimum_checked_against_effective_quantity() {
        let mut catalog = Catalog::new();
        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();

        // Quantity drops to 5; a minimum of 8 would now exceed it, so the
        // minimum field is skipped while the quantity change sticks
        let patch = ProductPatch {
            quantity: Some(5),
            minimum_stock: Some(8),
            ..ProductPatch::default()
        };
        catalog.update(code, &patch).unwrap();

        let product = catalog.find_by_code(code).unwrap();
        assert_eq!(product.quantity, 5);
        assert_eq!(product.minimum_stock, 10);
    }

    #[test]
    fn test_update_minimum_against_kept_quantity_when_quantity_invalid() {
        let mut catalog = Catalog::new();
        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();

        // Quantity patch is invalid (skipped); the minimum is judged against
        // the kept quantity of 50 and applies
        let patch = ProductPatch {
            quantity: Some(-1),
            minimum_stock: Some(30),
            ..ProductPatch::default()
        };
        catalog.update(code, &patch).unwrap();

        let product = catalog.find_by_code(code).unwrap();
        assert_eq!(product.quantity, 50);
        assert_eq!(product.minimum_stock, 30);
    }

    #[test]
    fn test_update_misses_inactive_and_unknown() {
        let mut catalog = Catalog::new();
        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();
        catalog.deactivate(code).unwrap();

        let patch = ProductPatch {
            quantity: Some(1),
            ..ProductPatch::default()
        };
        assert!(matches!(
            catalog.update(code, &patch),
            Err(CatalogError::ProductNotFound(_))
        ));
        assert!(matches!(
            catalog.update(999, &patch),
            Err(CatalogError::ProductNotFound(999))
        ));
    }

    #[test]
    fn test_deactivate_then_activate_round_trip() {
        let mut catalog = Catalog::new();
        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();
        let before = catalog.find_by_code(code).unwrap().clone();

        catalog.deactivate(code).unwrap();
        assert_eq!(catalog.count_active(), 0);

        catalog.activate(code).unwrap();
        let after = catalog.find_by_code(code).unwrap();

        // Everything but the flag survives the round trip untouched
        assert_eq!(*after, before);
    }

    #[test]
    fn test_activate_requires_inactive_match() {
        let mut catalog = Catalog::new();
        let code = catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();

        // Already active: a miss, not a no-op success
        assert!(catalog.activate(code).is_err());
        assert!(catalog.activate(999).is_err());
        assert!(catalog.deactivate(999).is_err());
    }

    #[test]
    fn test_list_active_order_and_limit() {
        let mut catalog = Catalog::new();
        for name in ["Arroz", "Feijao", "Milho", "Aveia"] {
            catalog.register(&draft(name, 9.99, 10, 5)).unwrap();
        }
        catalog.deactivate(2).unwrap();

        let listed = catalog.list_active(10);
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Arroz", "Milho", "Aveia"]);

        assert_eq!(catalog.list_active(2).len(), 2);
        assert_eq!(catalog.list_active(0).len(), 0);
    }

    #[test]
    fn test_list_below_minimum() {
        let mut catalog = Catalog::new();
        catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();
        let feijao = catalog.register(&draft("Feijao", 15.50, 20, 10)).unwrap();

        // Stock drains below the threshold through a normal update
        let patch = ProductPatch {
            quantity: Some(5),
            ..ProductPatch::default()
        };
        catalog.update(feijao, &patch).unwrap();

        let critical = catalog.list_below_minimum(10);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].code, feijao);
        assert!(critical[0].quantity <= critical[0].minimum_stock);
    }

    #[test]
    fn test_list_below_minimum_includes_boundary() {
        let mut catalog = Catalog::new();
        catalog.register(&draft("Sal", 3.49, 10, 10)).unwrap();

        // quantity == minimum_stock counts as needing replenishment
        assert_eq!(catalog.list_below_minimum(10).len(), 1);
    }

    #[test]
    fn test_list_by_category() {
        let mut catalog = Catalog::new();
        catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();

        let mut soda = draft("Refrigerante", 7.50, 100, 20);
        soda.category = Category::Drink.code();
        soda.unit = Unit::Liter.code();
        catalog.register(&soda).unwrap();

        let drinks = catalog.list_by_category(Category::Drink, 10);
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name, "Refrigerante");
        assert!(catalog.list_by_category(Category::Hygiene, 10).is_empty());
    }

    #[test]
    fn test_total_stock_value_exact_cents() {
        let mut catalog = Catalog::new();
        catalog.register(&draft("Arroz", 25.99, 50, 10)).unwrap();
        let code = catalog.register(&draft("Feijao", 7.50, 100, 20)).unwrap();

        // 25.99 × 50 + 7.50 × 100 = 1299.50 + 750.00 = 2049.50
        assert_eq!(catalog.total_stock_value().cents(), 204_950);

        // Inactive records drop out of the report
        catalog.deactivate(code).unwrap();
        assert_eq!(catalog.total_stock_value().cents(), 129_950);
    }

    #[test]
    fn test_from_parts_restores_wholesale() {
        let mut original = Catalog::new();
        original.register(&draft("Arroz", 25.99, 50, 10)).unwrap();
        original.register(&draft("Feijao", 15.50, 20, 10)).unwrap();
        original.deactivate(2).unwrap();

        let rebuilt = Catalog::from_parts(original.products().to_vec(), original.next_code());

        assert_eq!(rebuilt.products(), original.products());
        assert_eq!(rebuilt.next_code(), original.next_code());
        assert_eq!(rebuilt.count_active(), 1);
    }
}
