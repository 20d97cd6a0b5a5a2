//! Inventory page: searchable, paginated product table

use shared::stats::format_currency;
use shared::views::{paginate, search_products, stock_status, NO_PRODUCTS_FOUND};
use shared::Product;

use crate::error::AppResult;

use super::{pagination_footer, render_table};
use crate::routes::PageQuery;
use crate::AppState;

fn product_row(product: &Product, supplier: &str) -> Vec<String> {
    vec![
        product.sku.clone(),
        product.name.clone(),
        product.category.to_string(),
        supplier.to_string(),
        format_currency(product.price),
        product.stock_quantity.to_string(),
        stock_status(product.stock_quantity, product.min_stock_level)
            .label()
            .to_string(),
    ]
}

/// Render the inventory table filtered by the query's search text
pub fn inventory(state: &AppState, query: &PageQuery) -> AppResult<String> {
    let search = query.search.as_deref().unwrap_or_default();
    let matches = search_products(state.catalog.products(), search);
    tracing::debug!(search, matches = matches.len(), "Inventory search");

    let mut lines = vec!["Inventory".to_string()];
    if !search.is_empty() {
        lines.push(format!("Search: {search}"));
    }
    lines.push(String::new());

    if matches.is_empty() {
        lines.push(NO_PRODUCTS_FOUND.to_string());
        return Ok(lines.join("\n"));
    }

    let page = paginate(&matches, &query.pagination);
    let rows = page
        .data
        .iter()
        .map(|p| -> AppResult<Vec<String>> {
            let supplier = state.catalog.supplier(&p.supplier_id)?;
            Ok(product_row(p, &supplier.name))
        })
        .collect::<AppResult<Vec<_>>>()?;
    lines.push(render_table(
        &["SKU", "Name", "Category", "Supplier", "Price", "Stock", "Status"],
        &rows,
    ));
    lines.push(pagination_footer(&page.pagination));
    Ok(lines.join("\n"))
}
