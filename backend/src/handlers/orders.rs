//! Orders page: searchable, paginated order table

use shared::views::{paginate, search_orders, FormattedOrder, NO_ORDERS_FOUND};

use super::{pagination_footer, render_table};
use crate::routes::PageQuery;
use crate::AppState;

fn order_row(order: &FormattedOrder) -> Vec<String> {
    vec![
        order.id.clone(),
        order.customer.clone(),
        order.date.clone(),
        order.amount.clone(),
        order.status.to_string(),
    ]
}

/// Render the order table, newest first, filtered by id or customer
pub fn orders(state: &AppState, query: &PageQuery) -> String {
    let search = query.search.as_deref().unwrap_or_default();
    let formatted = state.catalog.formatted_orders();
    let matches = search_orders(&formatted, search);
    tracing::debug!(search, matches = matches.len(), "Order search");

    let mut lines = vec!["Orders".to_string()];
    if !search.is_empty() {
        lines.push(format!("Search: {search}"));
    }
    lines.push(String::new());

    if matches.is_empty() {
        lines.push(NO_ORDERS_FOUND.to_string());
        return lines.join("\n");
    }

    let page = paginate(&matches, &query.pagination);
    let rows: Vec<Vec<String>> = page.data.iter().map(|o| order_row(o)).collect();
    lines.push(render_table(
        &["Order ID", "Customer", "Date", "Amount", "Status"],
        &rows,
    ));
    lines.push(pagination_footer(&page.pagination));
    lines.join("\n")
}
