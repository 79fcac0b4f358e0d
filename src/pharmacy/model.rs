//! Pharmacy entity models

use serde::{Deserialize, Serialize};

/// A medicine in the catalogue. Price is strictly positive; stock may be
/// zero (out of stock) but never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// A placed order against a medicine. Status is free-form; orders are
/// created as [`Order::STATUS_ORDERED`] and removed entirely on
/// cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub medicine_id: String,
    pub quantity: u32,
    pub payment_method: String,
    pub status: String,
}

impl Order {
    /// Status assigned to every freshly created order.
    pub const STATUS_ORDERED: &'static str = "Ordered";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            id: "o1".to_string(),
            user_id: "u1".to_string(),
            medicine_id: "m1".to_string(),
            quantity: 2,
            payment_method: "card".to_string(),
            status: Order::STATUS_ORDERED.to_string(),
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["medicineId"], "m1");
        assert_eq!(value["paymentMethod"], "card");
        assert_eq!(value["status"], "Ordered");
    }
}
