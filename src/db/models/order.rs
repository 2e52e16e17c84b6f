//! Order Model
//!
//! Orders are read-only reference data for the dashboard: no manager owns
//! their lifecycle and checkout never creates one. The shapes here fix the
//! serialized layout and carry the pricing helpers the presentation layer
//! needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Product;

/// Order lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order still needs merchant attention
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::Ready)
    }
}

/// A product plus quantity, as assembled in the storefront cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Line total in cents, wholesale tiers applied
    pub fn line_total(&self) -> i64 {
        self.product.unit_price(self.quantity) * i64::from(self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub items: Vec<CartItem>,
    /// In cents
    pub subtotal: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl Order {
    /// Sum of line totals for a set of cart items
    pub fn compute_subtotal(items: &[CartItem]) -> i64 {
        items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&OrderStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&OrderStatus::Cancelled).unwrap(), "\"cancelled\"");
        let status: OrderStatus = serde_json::from_str("\"preparing\"").unwrap();
        assert_eq!(status, OrderStatus::Preparing);
    }

    #[test]
    fn test_is_open() {
        assert!(OrderStatus::Pending.is_open());
        assert!(OrderStatus::Ready.is_open());
        assert!(!OrderStatus::Delivered.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
    }

    #[test]
    fn test_seed_subtotals_are_consistent() {
        for order in seed::orders() {
            assert_eq!(order.subtotal, Order::compute_subtotal(&order.items), "order {}", order.id);
        }
    }

    #[test]
    fn test_created_at_round_trips_rfc3339() {
        let order = seed::orders().remove(0);
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"createdAt\""));
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.created_at, order.created_at);
    }
}
