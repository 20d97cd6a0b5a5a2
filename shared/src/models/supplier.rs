//! Supplier models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A supplier and the products it provides
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// 0-100
    pub performance_score: u8,
    /// Ids of products whose `supplier_id` is this supplier
    pub products: Vec<String>,
    pub created_at: DateTime<Utc>,
}
