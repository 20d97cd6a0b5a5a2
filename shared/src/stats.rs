//! Dashboard aggregates derived from the catalog

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::models::{
    DashboardCard, DashboardStats, InventoryBreakdown, InventorySlice, OrderStatus, Product, Role,
    TopProduct, Trend,
};

/// How many best sellers the dashboard lists
pub const TOP_PRODUCT_LIMIT: usize = 5;

const UNKNOWN_PRODUCT: &str = "Unknown Product";

// Placeholder figures the role cards display until real feeds exist
const SUPPLIER_ACTIVE_PRODUCTS: u32 = 12;
const SUPPLIER_RATING: &str = "93%";
const DISTRIBUTOR_ACTIVE_SHIPMENTS: u32 = 8;
const DISTRIBUTOR_DELIVERY_RATE: &str = "97%";
const RETAILER_ACTIVE_SUPPLIERS: u32 = 5;

/// Compute the dashboard aggregates.
///
/// The role is accepted for parity with the page contract; every role sees
/// the same figures.
pub fn dashboard_stats(catalog: &Catalog, _role: Role) -> DashboardStats {
    let pending_orders = catalog
        .orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();
    let total_revenue: Decimal = catalog.orders.iter().map(|o| o.total_amount).sum();
    let low_stock_items = catalog.products.iter().filter(|p| p.is_low_stock()).count();

    DashboardStats {
        total_orders: catalog.orders.len(),
        pending_orders,
        total_revenue,
        low_stock_items,
        top_products: top_products(catalog, TOP_PRODUCT_LIMIT),
    }
}

/// Rank products by total ordered quantity.
///
/// Ties keep the order in which a product id was first seen while walking
/// the orders.
pub fn top_products(catalog: &Catalog, limit: usize) -> Vec<TopProduct> {
    let mut tally: Vec<(&str, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in catalog.orders.iter().flat_map(|o| o.line_items.iter()) {
        match index.get(item.product_id.as_str()).copied() {
            Some(slot) => tally[slot].1 += item.quantity,
            None => {
                index.insert(item.product_id.as_str(), tally.len());
                tally.push((item.product_id.as_str(), item.quantity));
            }
        }
    }

    // stable sort keeps first-seen order among equal quantities
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    tally
        .into_iter()
        .take(limit)
        .map(|(id, quantity)| TopProduct {
            id: id.to_string(),
            name: catalog
                .product(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            quantity,
        })
        .collect()
}

/// Format a money amount as `$1234.50`
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

fn card(title: &str, value: impl ToString, description: &str) -> DashboardCard {
    DashboardCard {
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        trend: None,
        trend_value: None,
    }
}

fn with_trend(mut card: DashboardCard, trend: Trend, value: Option<&str>) -> DashboardCard {
    card.trend = Some(trend);
    card.trend_value = value.map(str::to_string);
    card
}

/// Summary cards for a role; without a role only the common pair is shown
pub fn dashboard_cards(role: Option<Role>, stats: &DashboardStats) -> Vec<DashboardCard> {
    let mut cards = vec![
        card("Total Orders", stats.total_orders, "All time orders"),
        with_trend(
            card("Pending Orders", stats.pending_orders, "Awaiting processing"),
            Trend::Neutral,
            None,
        ),
    ];

    match role {
        Some(Role::Admin) => {
            cards.push(with_trend(
                card(
                    "Total Revenue",
                    format_currency(stats.total_revenue),
                    "Compared to last month",
                ),
                Trend::Up,
                Some("12%"),
            ));
            cards.push(with_trend(
                card("Low Stock Items", stats.low_stock_items, "Items need restocking"),
                Trend::Down,
                Some("3"),
            ));
        }
        Some(Role::Supplier) => {
            cards.push(card("Products", SUPPLIER_ACTIVE_PRODUCTS, "Active products"));
            cards.push(with_trend(
                card("Performance", SUPPLIER_RATING, "Overall supplier rating"),
                Trend::Up,
                Some("5%"),
            ));
        }
        Some(Role::Distributor) => {
            cards.push(card("Active Shipments", DISTRIBUTOR_ACTIVE_SHIPMENTS, "In transit"));
            cards.push(with_trend(
                card("Delivery Rate", DISTRIBUTOR_DELIVERY_RATE, "On-time deliveries"),
                Trend::Up,
                Some("2%"),
            ));
        }
        Some(Role::Retailer) => {
            cards.push(card("Low Stock Items", stats.low_stock_items, "Items need restocking"));
            cards.push(card("Suppliers", RETAILER_ACTIVE_SUPPLIERS, "Active suppliers"));
        }
        None => {}
    }

    cards
}

/// Titles of the two overview panels below the cards
pub fn overview_panels(role: Option<Role>) -> [&'static str; 2] {
    match role {
        Some(Role::Admin) => ["Analytics Overview", "System Activity"],
        Some(Role::Supplier) => ["Product Performance", "Upcoming Orders"],
        Some(Role::Distributor) => ["Delivery Metrics", "Route Planning"],
        Some(Role::Retailer) | None => ["Purchase Orders", "Inventory Forecast"],
    }
}

fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Healthy / low / out-of-stock shares for the inventory status chart
pub fn inventory_breakdown(products: &[Product]) -> InventoryBreakdown {
    let total = products.len();
    let out = products.iter().filter(|p| p.stock_quantity == 0).count();
    let low = products
        .iter()
        .filter(|p| p.stock_quantity > 0 && p.is_low_stock())
        .count();
    let healthy = total - out - low;

    let slice = |name: &str, count: usize, color: &str| InventorySlice {
        name: name.to_string(),
        value: percent(count, total),
        color: color.to_string(),
    };

    InventoryBreakdown {
        slices: vec![
            slice("Healthy", healthy, "#10b981"),
            slice("Low Stock", low, "#f59e0b"),
            slice("Out of Stock", out, "#ef4444"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{generate_catalog, GeneratorOptions};
    use crate::models::{Order, OrderLineItem};
    use chrono::{TimeZone, Utc};

    fn fixture() -> Catalog {
        let anchor = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        generate_catalog(2024, anchor, &GeneratorOptions::default())
    }

    fn order(id: &str, items: &[(&str, u32)], status: OrderStatus) -> Order {
        let line_items: Vec<OrderLineItem> = items
            .iter()
            .map(|(pid, qty)| OrderLineItem {
                product_id: pid.to_string(),
                quantity: *qty,
                price: Decimal::from(10),
            })
            .collect();
        let total_amount = line_items.iter().map(OrderLineItem::line_total).sum();
        Order {
            id: id.to_string(),
            customer_id: "CUST1".to_string(),
            line_items,
            status,
            total_amount,
            shipping_address: String::new(),
            tracking_number: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_stats_counts_match_catalog() {
        let catalog = fixture();
        let stats = dashboard_stats(&catalog, Role::Admin);
        assert_eq!(stats.total_orders, 50);
        assert_eq!(
            stats.pending_orders,
            catalog
                .orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count()
        );
        assert_eq!(
            stats.total_revenue,
            catalog.orders.iter().map(|o| o.total_amount).sum::<Decimal>()
        );
        assert!(stats.top_products.len() <= TOP_PRODUCT_LIMIT);
    }

    #[test]
    fn test_stats_ignore_role() {
        let catalog = fixture();
        let admin = dashboard_stats(&catalog, Role::Admin);
        for role in Role::ALL {
            assert_eq!(dashboard_stats(&catalog, role), admin);
        }
    }

    #[test]
    fn test_top_products_ties_keep_first_seen_order() {
        let mut catalog = fixture();
        catalog.orders = vec![
            order("ORD001", &[("PRD003", 2), ("PRD001", 5)], OrderStatus::Pending),
            order("ORD002", &[("PRD002", 2), ("PRD003", 3)], OrderStatus::Shipped),
            order("ORD003", &[("PRD999", 1)], OrderStatus::Cancelled),
        ];

        let top = top_products(&catalog, 5);
        let ids: Vec<&str> = top.iter().map(|t| t.id.as_str()).collect();
        // PRD003 and PRD001 tie on 5; PRD003 was seen first
        assert_eq!(ids, vec!["PRD003", "PRD001", "PRD002", "PRD999"]);
        assert_eq!(top[3].name, "Unknown Product");
    }

    #[test]
    fn test_top_products_limit() {
        let catalog = fixture();
        assert_eq!(top_products(&catalog, 2).len(), 2);
        assert!(top_products(&catalog, 0).is_empty());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::from(1234)), "$1234.00");
        assert_eq!(format_currency(Decimal::new(995, 1)), "$99.50");
    }

    #[test]
    fn test_cards_per_role() {
        let stats = dashboard_stats(&fixture(), Role::Admin);
        assert_eq!(dashboard_cards(None, &stats).len(), 2);

        let admin = dashboard_cards(Some(Role::Admin), &stats);
        let titles: Vec<&str> = admin.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Total Orders", "Pending Orders", "Total Revenue", "Low Stock Items"]
        );
        assert_eq!(admin[2].value, format_currency(stats.total_revenue));

        let supplier = dashboard_cards(Some(Role::Supplier), &stats);
        assert_eq!(supplier[3].value, "93%");

        let retailer = dashboard_cards(Some(Role::Retailer), &stats);
        assert_eq!(retailer[2].value, stats.low_stock_items.to_string());
        assert_eq!(retailer[3].title, "Suppliers");
    }

    #[test]
    fn test_overview_panels() {
        assert_eq!(overview_panels(Some(Role::Distributor))[1], "Route Planning");
        assert_eq!(overview_panels(None), overview_panels(Some(Role::Retailer)));
    }

    #[test]
    fn test_inventory_breakdown() {
        let mut products = fixture().products;
        products.truncate(4);
        products[0].stock_quantity = 0;
        products[1].stock_quantity = 5;
        products[2].stock_quantity = 50;
        products[3].stock_quantity = 10;

        let breakdown = inventory_breakdown(&products);
        assert_eq!(breakdown.slices[0].value, 50);
        assert_eq!(breakdown.low_stock_percent(), 25);
        assert_eq!(breakdown.out_of_stock_percent(), 25);
        assert!(breakdown.needs_attention());
    }

    #[test]
    fn test_inventory_breakdown_empty() {
        let breakdown = inventory_breakdown(&[]);
        assert!(breakdown.slices.iter().all(|s| s.value == 0));
        assert!(!breakdown.needs_attention());
    }
}
