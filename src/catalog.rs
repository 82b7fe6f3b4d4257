use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Shelf quantities below this count are flagged as low stock on the
/// retailer dashboard.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// One entry of the wholesaler's master catalog, as served by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Payload for the wholesaler's "add product" form.
///
/// `base_price` is part of the form contract even though the backend's
/// catalog entity currently discards it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub base_price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One retailer shelf line: a catalog product priced and stocked for a shop.
///
/// This is the shape the cart consumes when the customer adds an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub inventory_id: i64,
    pub product: Product,
    pub price: Money,
    pub stock: u32,
}

impl InventoryItem {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::of(self.stock)
    }
}

/// Payload for the retailer's "update stock" form. The backend upserts on
/// the (retailer, product) pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpsert {
    pub retailer_id: i64,
    pub product_id: i64,
    pub price: Money,
    pub stock: u32,
}

/// Shelf-status classification shown next to each inventory row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    pub fn of(stock: u32) -> StockLevel {
        if stock == 0 {
            StockLevel::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }
}
