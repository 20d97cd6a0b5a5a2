//! Dashboard page: summary cards, overview panels, top products, recent
//! orders and the inventory status breakdown

use shared::stats::{dashboard_cards, overview_panels};
use shared::views::paginate;
use shared::{DashboardCard, InventoryBreakdown, Pagination, Trend};

use super::{pagination_footer, render_table};
use crate::middleware::CurrentUser;
use crate::AppState;

/// Rows shown in the recent orders table
pub const RECENT_ORDERS_PER_PAGE: u32 = 5;

fn render_card(card: &DashboardCard) -> String {
    let trend = match (card.trend, &card.trend_value) {
        (Some(trend), Some(value)) => {
            let arrow = match trend {
                Trend::Up => "↑",
                Trend::Down => "↓",
                Trend::Neutral => "→",
            };
            format!(" {arrow} {value}")
        }
        _ => String::new(),
    };
    format!(
        "[{}] {}{}\n    {}",
        card.title, card.value, trend, card.description
    )
}

fn render_breakdown(breakdown: &InventoryBreakdown) -> Vec<String> {
    let mut lines = vec!["Inventory Status".to_string()];
    for slice in &breakdown.slices {
        lines.push(format!("  {:<13} {:>3}%", slice.name, slice.value));
    }
    if breakdown.needs_attention() {
        lines.push(format!(
            "  ! {}% of inventory needs attention",
            breakdown.low_stock_percent() + breakdown.out_of_stock_percent()
        ));
    }
    lines
}

/// Render the dashboard for the signed-in user
pub fn dashboard(state: &AppState, current_user: &CurrentUser, recent_page: u32) -> String {
    let role = current_user.role();
    let stats = state.catalog.dashboard_stats(role);

    let mut lines = vec![
        "Dashboard".to_string(),
        format!(
            "Welcome back, {}! Here's what's happening with your supply chain today.",
            current_user.0.name
        ),
        String::new(),
    ];

    for card in dashboard_cards(Some(role), &stats) {
        lines.push(render_card(&card));
    }

    lines.push(String::new());
    lines.push(format!("{} Overview", role.title()));
    for panel in overview_panels(Some(role)) {
        lines.push(format!("  - {panel}"));
    }

    lines.push(String::new());
    lines.push("Top Products".to_string());
    if stats.top_products.is_empty() {
        lines.push("  No orders yet".to_string());
    }
    for (rank, product) in stats.top_products.iter().enumerate() {
        lines.push(format!(
            "  {}. {} ({} sold)",
            rank + 1,
            product.name,
            product.quantity
        ));
    }

    let orders = state.catalog.formatted_orders();
    let page = paginate(
        &orders,
        &Pagination::new(recent_page, RECENT_ORDERS_PER_PAGE),
    );
    let rows: Vec<Vec<String>> = page
        .data
        .iter()
        .map(|o| {
            vec![
                o.id.clone(),
                o.customer.clone(),
                o.date.clone(),
                o.amount.clone(),
                o.status.to_string(),
            ]
        })
        .collect();

    lines.push(String::new());
    lines.push("Recent Orders".to_string());
    lines.push(render_table(
        &["Order ID", "Customer", "Date", "Amount", "Status"],
        &rows,
    ));
    lines.push(pagination_footer(&page.pagination));

    lines.push(String::new());
    lines.extend(render_breakdown(&state.catalog.inventory_breakdown()));

    lines.join("\n")
}
