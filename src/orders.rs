use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::checkout::PaymentMode;
use crate::money::Money;
use crate::session::User;

/// Fulfillment state of an order.
///
/// The wire strings are the backend's exact values, casing included: orders
/// are created as lowercase `"placed"` and move through uppercase `"PACKED"`
/// and `"DELIVERED"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "placed")]
    Placed,
    #[serde(rename = "PACKED")]
    Packed,
    #[serde(rename = "DELIVERED")]
    Delivered,
}

impl OrderStatus {
    /// The retailer's next fulfillment step, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Packed),
            OrderStatus::Packed => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Packed => "PACKED",
            OrderStatus::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// One fulfilled line of a placed order, as read back from the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_item_id: i64,
    pub product: Product,
    pub quantity: u32,
    pub price_at_purchase: Money,
}

/// An order as listed on the customer's history page and the retailer's
/// fulfillment queue.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub customer: User,
    #[serde(default)]
    pub retailer: Option<User>,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
    #[serde(default)]
    pub payment_mode: Option<PaymentMode>,
    pub order_status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Both dashboards show newest orders first; order ids are monotonically
/// assigned, so sorting by id descending is sorting by age.
pub fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.order_id.cmp(&a.order_id));
}
