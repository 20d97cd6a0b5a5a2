//! Customer order models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fulfilment status of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product line within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub product_id: String,
    pub quantity: u32,
    /// Unit price captured when the order was placed
    pub price: Decimal,
}

impl OrderLineItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A customer order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    #[serde(rename = "products")]
    pub line_items: Vec<OrderLineItem>,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub shipping_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Sum of quantity x unit price over the line items
    pub fn line_items_total(&self) -> Decimal {
        self.line_items.iter().map(OrderLineItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(tracking_number: Option<&str>) -> Order {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        Order {
            id: "ORD001".to_string(),
            customer_id: "CUST7".to_string(),
            line_items: vec![
                OrderLineItem {
                    product_id: "PRD002".to_string(),
                    quantity: 3,
                    price: Decimal::new(4250, 2),
                },
                OrderLineItem {
                    product_id: "PRD005".to_string(),
                    quantity: 1,
                    price: Decimal::from(10),
                },
            ],
            status: OrderStatus::Shipped,
            total_amount: Decimal::new(13750, 2),
            shipping_address: "12 Customer St, City, State, 12345".to_string(),
            tracking_number: tracking_number.map(str::to_string),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_line_items_total() {
        assert_eq!(order(None).line_items_total(), Decimal::new(13750, 2));
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(order(Some("TRK42"))).unwrap();
        assert_eq!(json["customerId"], "CUST7");
        assert_eq!(json["products"][0]["productId"], "PRD002");
        assert_eq!(json["status"], "shipped");
        assert_eq!(json["trackingNumber"], "TRK42");

        let untracked = serde_json::to_value(order(None)).unwrap();
        assert!(untracked.get("trackingNumber").is_none());
        let back: Order = serde_json::from_value(untracked).unwrap();
        assert_eq!(back, order(None));
    }
}
