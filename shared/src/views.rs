//! Page-level projections: formatted order rows, search, stock badges and
//! pagination

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Order, OrderStatus, Product};
use crate::stats::format_currency;
use crate::types::{Locale, PaginatedResponse, Pagination, PaginationMeta};

pub const NO_PRODUCTS_FOUND: &str = "No products found. Try adjusting your search.";
pub const NO_ORDERS_FOUND: &str = "No orders found. Try adjusting your search.";

/// One row of the orders table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormattedOrder {
    pub id: String,
    pub customer: String,
    pub date: String,
    pub amount: String,
    pub status: OrderStatus,
}

/// `CUST42` becomes `Customer 42`
pub fn customer_label(customer_id: &str) -> String {
    format!(
        "Customer {}",
        customer_id.strip_prefix("CUST").unwrap_or(customer_id)
    )
}

/// Read a display date back as US month/day/year or ISO `YYYY-MM-DD`.
///
/// Day-first locales yield `None` or a transposed date.
pub fn parse_display_date(date: &str) -> Option<NaiveDate> {
    if let Ok(iso) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        return Some(iso);
    }
    let mut parts = date.split('/').map(|p| p.trim().parse::<u32>().ok());
    let month = parts.next()??;
    let day = parts.next()??;
    let year = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Project orders into table rows, newest first.
///
/// The ordering comes from re-reading each row's display date, so it is only
/// faithful for `Locale::EnUs` and `Locale::Iso`. Rows whose date does not
/// read back sink to the end in generation order.
pub fn formatted_orders(orders: &[Order], locale: Locale) -> Vec<FormattedOrder> {
    let mut rows: Vec<FormattedOrder> = orders
        .iter()
        .map(|order| FormattedOrder {
            id: order.id.clone(),
            customer: customer_label(&order.customer_id),
            date: locale.format_date(order.created_at.date_naive()),
            amount: format_currency(order.total_amount),
            status: order.status,
        })
        .collect();

    rows.sort_by_key(|row| std::cmp::Reverse(parse_display_date(&row.date)));
    rows
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive match on name, SKU or category; a blank query keeps all
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| {
            matches(&p.name, &needle)
                || matches(&p.sku, &needle)
                || matches(p.category.as_str(), &needle)
        })
        .collect()
}

/// Case-insensitive match on order id or customer label; a blank query keeps all
pub fn search_orders<'a>(rows: &'a [FormattedOrder], query: &str) -> Vec<&'a FormattedOrder> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| matches(&row.id, &needle) || matches(&row.customer, &needle))
        .collect()
}

/// Badge color family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
}

/// Stock level bucket for the inventory table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            StockStatus::OutOfStock => BadgeTone::Red,
            StockStatus::LowStock => BadgeTone::Yellow,
            StockStatus::InStock => BadgeTone::Green,
        }
    }
}

pub fn stock_status(quantity: u32, min_level: u32) -> StockStatus {
    if quantity == 0 {
        StockStatus::OutOfStock
    } else if quantity < min_level {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

pub fn order_status_tone(status: OrderStatus) -> BadgeTone {
    match status {
        OrderStatus::Pending => BadgeTone::Yellow,
        OrderStatus::Processing => BadgeTone::Blue,
        OrderStatus::Shipped => BadgeTone::Purple,
        OrderStatus::Delivered => BadgeTone::Green,
        OrderStatus::Cancelled => BadgeTone::Red,
    }
}

/// Slice one page out of an in-memory list
pub fn paginate<T: Clone>(items: &[T], pagination: &Pagination) -> PaginatedResponse<T> {
    let Pagination { page, per_page } = pagination.normalized();
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page as usize) as u32;

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let data = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    PaginatedResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total_items: total_items as u64,
            total_pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{generate_catalog, GeneratorOptions};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn catalog() -> crate::catalog::Catalog {
        let anchor = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        generate_catalog(31, anchor, &GeneratorOptions::default())
    }

    #[test]
    fn test_customer_label() {
        assert_eq!(customer_label("CUST42"), "Customer 42");
        assert_eq!(customer_label("guest"), "Customer guest");
    }

    #[test]
    fn test_parse_display_date() {
        assert_eq!(
            parse_display_date("12/31/2023"),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
        // en-GB day-first is read month-first
        assert_eq!(
            parse_display_date("05/03/2024"),
            NaiveDate::from_ymd_opt(2024, 5, 3)
        );
        assert_eq!(parse_display_date("31/12/2023"), None);
        assert_eq!(
            parse_display_date("2024-03-05"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_display_date("2024-13-05"), None);
        assert_eq!(parse_display_date("1/2/3/4"), None);
    }

    #[test]
    fn test_formatted_orders_us_newest_first() {
        let catalog = catalog();
        let rows = formatted_orders(&catalog.orders, Locale::EnUs);
        assert_eq!(rows.len(), catalog.orders.len());

        let dates: Vec<NaiveDate> = rows
            .iter()
            .map(|r| parse_display_date(&r.date).unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));

        let first = catalog.order(&rows[0].id).unwrap();
        assert_eq!(rows[0].amount, format_currency(first.total_amount));
        assert!(rows[0].customer.starts_with("Customer "));
    }

    #[test]
    fn test_formatted_orders_iso_newest_first() {
        let catalog = catalog();
        let iso = formatted_orders(&catalog.orders, Locale::Iso);
        let us = formatted_orders(&catalog.orders, Locale::EnUs);

        let dates: Vec<NaiveDate> = iso
            .iter()
            .map(|r| parse_display_date(&r.date).unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));

        let iso_ids: Vec<&str> = iso.iter().map(|r| r.id.as_str()).collect();
        let us_ids: Vec<&str> = us.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(iso_ids, us_ids);
    }

    #[test]
    fn test_formatted_orders_day_first_not_sorted_by_date() {
        let catalog = catalog();
        let rows = formatted_orders(&catalog.orders, Locale::DeDe);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = catalog.orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_search_products() {
        let catalog = catalog();
        assert_eq!(search_products(&catalog.products, "   ").len(), 20);
        assert_eq!(search_products(&catalog.products, "sku-0003").len(), 1);
        // "Product 1" also matches 10..19
        assert_eq!(search_products(&catalog.products, "product 1").len(), 11);
        assert!(search_products(&catalog.products, "zzz-no-match").is_empty());

        let food = search_products(&catalog.products, "FOOD");
        assert!(food
            .iter()
            .all(|p| p.category == crate::models::Category::Food));
    }

    #[test]
    fn test_search_orders() {
        let rows = formatted_orders(&catalog().orders, Locale::EnUs);
        assert_eq!(search_orders(&rows, "ord001").len(), 1);
        assert_eq!(search_orders(&rows, "").len(), 50);
        assert!(search_orders(&rows, "nothing here").is_empty());
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(stock_status(0, 10), StockStatus::OutOfStock);
        assert_eq!(stock_status(9, 10), StockStatus::LowStock);
        assert_eq!(stock_status(10, 10), StockStatus::InStock);
        assert_eq!(StockStatus::LowStock.label(), "Low Stock");
        assert_eq!(StockStatus::OutOfStock.tone(), BadgeTone::Red);
    }

    #[test]
    fn test_order_status_tone() {
        assert_eq!(order_status_tone(OrderStatus::Shipped), BadgeTone::Purple);
        assert_eq!(order_status_tone(OrderStatus::Cancelled), BadgeTone::Red);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(&items, &Pagination::new(3, 20));
        assert_eq!(page.data, (41..=45).collect::<Vec<_>>());
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_items, 45);

        let beyond = paginate(&items, &Pagination::new(9, 20));
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.pagination.page, 9);

        let empty: Vec<u32> = Vec::new();
        assert_eq!(paginate(&empty, &Pagination::default()).pagination.total_pages, 0);
    }

    proptest! {
        #[test]
        fn test_paginate_covers_every_item(len in 0usize..120, per_page in 0u32..40) {
            let items: Vec<usize> = (0..len).collect();
            let per_page = Pagination::new(1, per_page).normalized().per_page;
            let first = paginate(&items, &Pagination::new(1, per_page));

            let mut seen = Vec::new();
            for page in 1..=first.pagination.total_pages {
                let slice = paginate(&items, &Pagination::new(page, per_page));
                prop_assert!(slice.data.len() <= per_page as usize);
                seen.extend(slice.data);
            }
            prop_assert_eq!(seen, items);
        }
    }
}
