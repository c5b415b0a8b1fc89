//! Order models for the admin console.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Order {
    pub _id: String,
    pub user: String,
    #[serde(rename = "orderItems")]
    pub order_items: Vec<OrderItem>,
    #[serde(rename = "itemsPrice")]
    pub items_price: f64,
    #[serde(rename = "taxPrice")]
    pub tax_price: f64,
    #[serde(rename = "shippingPrice")]
    pub shipping_price: f64,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    #[serde(rename = "orderStatus")]
    pub order_status: String,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    #[serde(rename = "shippingAddress")]
    pub shipping_address: String,
    #[serde(rename = "orderNotes")]
    pub order_notes: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "deliveredAt")]
    pub delivered_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrderItem {
    pub product: String,
    pub name: String,
    pub quantity: u64,
    pub price: f64,
}

impl Order {
    pub fn total_items(&self) -> u64 {
        self.order_items.iter().map(|item| item.quantity).sum()
    }
}
