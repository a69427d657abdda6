//! The interactive menu loop.
//!
//! Handlers are deliberately thin: gather input, call one core operation,
//! print the outcome. Domain failures arrive as typed errors and are
//! rendered as messages here - the collaborator contract is that this layer
//! never bypasses the store's validation and never mutates records itself.

use std::io;

use tracing::{error, info, warn};

use stockroom_core::{
    validation::validate_code, Catalog, Category, Product, ProductDraft, ProductPatch, Unit,
};
use stockroom_persist::snapshot;

use crate::config::CliConfig;
use crate::input;

/// Loads the catalog (when a snapshot exists) and runs the menu until the
/// user quits.
pub fn run(config: &CliConfig) -> io::Result<()> {
    let mut catalog = if snapshot::exists(&config.data_path) {
        match snapshot::load(&config.data_path) {
            Ok(loaded) => {
                println!(
                    "Loaded {} product(s) from {}",
                    loaded.len(),
                    config.data_path.display()
                );
                loaded
            }
            Err(err) => {
                error!(%err, "startup load failed");
                println!("Could not load existing data ({err}); starting empty.");
                Catalog::new()
            }
        }
    } else {
        Catalog::new()
    };

    loop {
        print_menu(&catalog);
        let option = input::read_i32("\nChoose an option: ")?;

        match option {
            Some(1) => handle_register(&mut catalog)?,
            Some(2) => handle_list(&catalog, config),
            Some(3) => handle_find(&catalog)?,
            Some(4) => handle_update(&mut catalog)?,
            Some(5) => handle_deactivate(&mut catalog)?,
            Some(6) => handle_activate(&mut catalog)?,
            Some(7) => handle_below_minimum(&catalog, config),
            Some(8) => handle_by_category(&catalog, config)?,
            Some(9) => handle_summary(&catalog),
            Some(10) => handle_save(&catalog, config),
            Some(11) => handle_reload(&mut catalog, config),
            Some(12) => handle_backup(config),
            Some(0) => {
                info!("exiting on user request");
                println!("\nGoodbye.");
                return Ok(());
            }
            _ => println!("\nInvalid option, try again."),
        }
    }
}

fn print_menu(catalog: &Catalog) {
    println!();
    println!("========================================");
    println!("        STOCKROOM - MARKET STOCK");
    println!("========================================");
    println!("  Active products: {}", catalog.count_active());
    println!("========================================");
    println!("   1 - Register product");
    println!("   2 - List products");
    println!("   3 - Find product");
    println!("   4 - Edit product");
    println!("   5 - Remove product");
    println!("   6 - Restore product");
    println!("   7 - Products below minimum");
    println!("   8 - Products by category");
    println!("   9 - Inventory summary");
    println!("  10 - Save data");
    println!("  11 - Reload data");
    println!("  12 - Back up data file");
    println!("   0 - Exit");
    println!("========================================");
}

fn print_product(product: &Product) {
    println!(
        "  [{:>6}] {:<30} {:>10}  {:>6} {:<3} (min {:>3})  {}",
        product.code,
        product.name,
        product.price().to_string(),
        product.quantity,
        product.unit.label(),
        product.minimum_stock,
        product.category.label(),
    );
}

// =============================================================================
// Handlers
// =============================================================================

fn handle_register(catalog: &mut Catalog) -> io::Result<()> {
    println!("\n--- Register product ---");

    let name = input::prompt_line("Name (2-63 characters): ")?;
    let Some(price) = input::read_decimal("Price (0.01-9999.99): ")? else {
        println!("Invalid number, registration cancelled.");
        return Ok(());
    };
    let Some(quantity) = input::read_i32("Quantity in stock: ")? else {
        println!("Invalid number, registration cancelled.");
        return Ok(());
    };
    let Some(minimum_stock) = input::read_i32("Minimum stock: ")? else {
        println!("Invalid number, registration cancelled.");
        return Ok(());
    };

    println!("Categories:");
    for category in Category::ALL {
        println!("  {} - {}", category.code(), category.label());
    }
    let Some(category) = input::read_i32("Category: ")? else {
        println!("Invalid number, registration cancelled.");
        return Ok(());
    };

    println!("Units:");
    for unit in Unit::ALL {
        println!("  {} - {}", unit.code(), unit.label());
    }
    let Some(unit) = input::read_i32("Unit: ")? else {
        println!("Invalid number, registration cancelled.");
        return Ok(());
    };

    let draft = ProductDraft {
        name,
        price,
        quantity,
        minimum_stock,
        category,
        unit,
    };
    match catalog.register(&draft) {
        Ok(code) => {
            info!(code, "product registered");
            println!("Product registered with code {code}.");
        }
        Err(err) => println!("Registration failed: {err}"),
    }
    Ok(())
}

fn handle_list(catalog: &Catalog, config: &CliConfig) {
    println!("\n--- Active products ---");
    let products = catalog.list_active(config.list_limit);
    if products.is_empty() {
        println!("  No active products.");
        return;
    }
    for product in products {
        print_product(product);
    }
}

fn handle_find(catalog: &Catalog) -> io::Result<()> {
    println!("\n--- Find product ---");
    println!("  1 - By code");
    println!("  2 - By name");

    match input::read_i32("Search by: ")? {
        Some(1) => {
            let Some(code) = input::read_i32("Code: ")? else {
                println!("Invalid number.");
                return Ok(());
            };
            if validate_code(code).is_err() {
                println!("Codes are positive numbers of up to six digits.");
                return Ok(());
            }
            match catalog.find_by_code(code) {
                Some(product) => print_product(product),
                None => println!("No active product with code {code}."),
            }
        }
        Some(2) => {
            let query = input::prompt_line("Name contains: ")?;
            match catalog.find_by_name(&query) {
                Some(product) => print_product(product),
                None => println!("No active product matches \"{query}\"."),
            }
        }
        _ => println!("Invalid option."),
    }
    Ok(())
}

/// Per-field edit: empty input keeps the current value; values that break a
/// domain rule are kept too (the store applies the patch best-effort).
fn handle_update(catalog: &mut Catalog) -> io::Result<()> {
    println!("\n--- Edit product ---");
    let Some(code) = input::read_i32("Code: ")? else {
        println!("Invalid number.");
        return Ok(());
    };

    match catalog.find_by_code(code) {
        Some(product) => {
            println!("Current values:");
            print_product(product);
        }
        None => {
            println!("No active product with code {code}.");
            return Ok(());
        }
    }
    println!("Press Enter to keep a field unchanged.");

    let name_line = input::prompt_line("New name: ")?;
    let price_line = input::prompt_line("New price: ")?;
    let quantity_line = input::prompt_line("New quantity: ")?;
    let minimum_line = input::prompt_line("New minimum stock: ")?;
    let category_line = input::prompt_line("New category (1-5): ")?;
    let unit_line = input::prompt_line("New unit (1-5): ")?;

    let patch = ProductPatch {
        name: (!name_line.is_empty()).then_some(name_line),
        price: input::parse_decimal(&price_line),
        quantity: input::parse_i32(&quantity_line),
        minimum_stock: input::parse_i32(&minimum_line),
        category: input::parse_i32(&category_line),
        unit: input::parse_i32(&unit_line),
    };

    match catalog.update(code, &patch) {
        Ok(()) => {
            info!(code, "product updated");
            println!("Product updated (invalid fields were kept as they were).");
            if let Some(product) = catalog.find_by_code(code) {
                print_product(product);
            }
        }
        Err(err) => println!("Update failed: {err}"),
    }
    Ok(())
}

fn handle_deactivate(catalog: &mut Catalog) -> io::Result<()> {
    println!("\n--- Remove product ---");
    let Some(code) = input::read_i32("Code: ")? else {
        println!("Invalid number.");
        return Ok(());
    };

    match catalog.deactivate(code) {
        Ok(()) => {
            info!(code, "product deactivated");
            println!("Product removed (it can be restored later).");
        }
        Err(err) => println!("Remove failed: {err}"),
    }
    Ok(())
}

fn handle_activate(catalog: &mut Catalog) -> io::Result<()> {
    println!("\n--- Restore product ---");
    let Some(code) = input::read_i32("Code: ")? else {
        println!("Invalid number.");
        return Ok(());
    };

    match catalog.activate(code) {
        Ok(()) => {
            info!(code, "product reactivated");
            println!("Product restored.");
        }
        Err(err) => println!("Restore failed: {err}"),
    }
    Ok(())
}

fn handle_below_minimum(catalog: &Catalog, config: &CliConfig) {
    println!("\n--- Products below minimum stock ---");
    let products = catalog.list_below_minimum(config.list_limit);
    if products.is_empty() {
        println!("  All stocked products are above their minimum.");
        return;
    }
    for product in products {
        print_product(product);
    }
}

fn handle_by_category(catalog: &Catalog, config: &CliConfig) -> io::Result<()> {
    println!("\n--- Products by category ---");
    for category in Category::ALL {
        println!("  {} - {}", category.code(), category.label());
    }
    let Some(code) = input::read_i32("Category: ")? else {
        println!("Invalid number.");
        return Ok(());
    };
    let Some(category) = Category::from_code(code) else {
        println!("Unknown category code {code}.");
        return Ok(());
    };

    let products = catalog.list_by_category(category, config.list_limit);
    if products.is_empty() {
        println!("  No active products in {}.", category.label());
    }
    for product in products {
        print_product(product);
    }
    Ok(())
}

fn handle_summary(catalog: &Catalog) {
    println!("\n--- Inventory summary ---");
    println!("  Active products:   {}", catalog.count_active());
    println!("  Total records:     {}", catalog.len());
    println!("  Total stock value: {}", catalog.total_stock_value());
}

fn handle_save(catalog: &Catalog, config: &CliConfig) {
    match snapshot::save(catalog, &config.data_path) {
        Ok(()) => println!("\nData saved to {}.", config.data_path.display()),
        Err(err) => {
            error!(%err, "save failed");
            println!("\nSave failed: {err}");
        }
    }
}

/// Wholesale reload: the in-memory catalog is replaced only when the load
/// succeeds, so a corrupt file costs nothing but the attempt.
fn handle_reload(catalog: &mut Catalog, config: &CliConfig) {
    match snapshot::load(&config.data_path) {
        Ok(loaded) => {
            println!("\nReloaded {} product(s) from disk.", loaded.len());
            *catalog = loaded;
        }
        Err(err) => {
            warn!(%err, "reload failed");
            println!("\nReload failed: {err}");
            println!("The catalog in memory was left untouched.");
        }
    }
}

fn handle_backup(config: &CliConfig) {
    match snapshot::backup(&config.data_path) {
        Ok(backup_path) => println!("\nBackup written to {}.", backup_path.display()),
        Err(err) => {
            warn!(%err, "backup failed");
            println!("\nBackup failed: {err}");
        }
    }
}
