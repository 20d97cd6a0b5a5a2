//! Validation utilities for the dashboard catalog and session records

use std::collections::HashSet;

use rust_decimal::Decimal;
use validator::Validate;

use crate::catalog::Catalog;
use crate::models::{Order, Product, Supplier, User};

// ============================================================================
// Catalog Integrity
// ============================================================================

/// Validate that price and cost are non-negative
pub fn validate_product(product: &Product) -> Result<(), &'static str> {
    if product.price < Decimal::ZERO {
        return Err("Product price cannot be negative");
    }
    if product.cost < Decimal::ZERO {
        return Err("Product cost cannot be negative");
    }
    Ok(())
}

/// Validate that the stored total equals the sum of its line items
pub fn validate_order_total(order: &Order) -> Result<(), &'static str> {
    if order.total_amount != order.line_items_total() {
        return Err("Order total does not match its line items");
    }
    Ok(())
}

/// Validate performance score is in range 0-100
pub fn validate_performance_score(score: u8) -> Result<(), &'static str> {
    if score > 100 {
        return Err("Performance score must be between 0 and 100");
    }
    Ok(())
}

/// Validate a supplier's product list is exactly the products pointing at it
pub fn validate_supplier_products(
    supplier: &Supplier,
    products: &[Product],
) -> Result<(), &'static str> {
    let expected: HashSet<&str> = products
        .iter()
        .filter(|p| p.supplier_id == supplier.id)
        .map(|p| p.id.as_str())
        .collect();
    let listed: HashSet<&str> = supplier.products.iter().map(String::as_str).collect();

    if listed.len() != supplier.products.len() {
        return Err("Supplier lists a product more than once");
    }
    if listed != expected {
        return Err("Supplier product list out of sync with products");
    }
    Ok(())
}

/// Validate every cross-reference in a catalog
pub fn validate_catalog(catalog: &Catalog) -> Result<(), &'static str> {
    let mut ids = HashSet::new();
    for product in &catalog.products {
        if !ids.insert(product.id.as_str()) {
            return Err("Duplicate product id");
        }
        validate_product(product)?;
    }

    for supplier in &catalog.suppliers {
        validate_performance_score(supplier.performance_score)?;
        validate_supplier_products(supplier, &catalog.products)?;
    }

    for order in &catalog.orders {
        validate_order_total(order)?;
        if order
            .line_items
            .iter()
            .any(|item| !ids.contains(item.product_id.as_str()))
        {
            return Err("Order references an unknown product");
        }
    }
    Ok(())
}

// ============================================================================
// Session Records
// ============================================================================

/// Validate a deserialized session user
pub fn validate_session_user(user: &User) -> Result<(), &'static str> {
    user.validate().map_err(|_| "Invalid session record")
}
