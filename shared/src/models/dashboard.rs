//! Dashboard summary models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregates shown on the dashboard, recomputed on every request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub total_revenue: Decimal,
    pub low_stock_items: usize,
    pub top_products: Vec<TopProduct>,
}

/// A best-selling product ranked by ordered quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

/// Direction indicator on a summary card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// A role-specific summary card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCard {
    pub title: String,
    pub value: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_value: Option<String>,
}

/// One slice of the inventory status chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventorySlice {
    pub name: String,
    /// Whole percent of all products
    pub value: u32,
    pub color: String,
}

/// Stock health across the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryBreakdown {
    pub slices: Vec<InventorySlice>,
}

impl InventoryBreakdown {
    fn percent_of(&self, name: &str) -> u32 {
        self.slices
            .iter()
            .find(|slice| slice.name == name)
            .map(|slice| slice.value)
            .unwrap_or(0)
    }

    pub fn low_stock_percent(&self) -> u32 {
        self.percent_of("Low Stock")
    }

    pub fn out_of_stock_percent(&self) -> u32 {
        self.percent_of("Out of Stock")
    }

    /// More than 30% of products are low or out of stock
    pub fn needs_attention(&self) -> bool {
        self.low_stock_percent() + self.out_of_stock_percent() > 30
    }
}
