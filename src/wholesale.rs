use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::session::User;

/// Lifecycle of a retailer's restock request at the wholesaler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WholesaleStatus {
    Pending,
    Approved,
    Rejected,
}

impl WholesaleStatus {
    pub fn is_pending(self) -> bool {
        self == WholesaleStatus::Pending
    }
}

/// Payload the retailer posts to ask the wholesaler for stock.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRequest {
    pub retailer_id: i64,
    pub product_id: i64,
    pub quantity: u32,
}

/// A restock request as read back from the backend, shown in the
/// wholesaler's approval queue and the retailer's request history.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WholesaleOrder {
    pub id: i64,
    pub retailer: User,
    pub product: Product,
    pub quantity: u32,
    pub status: WholesaleStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_request_wire_shape() {
        let request = StockRequest {
            retailer_id: 2,
            product_id: 3,
            quantity: 50,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "retailerId": 2, "productId": 3, "quantity": 50 })
        );
    }

    #[test]
    fn status_strings() {
        assert_eq!(
            serde_json::to_string(&WholesaleStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        let status: WholesaleStatus = serde_json::from_str("\"APPROVED\"").unwrap();
        assert_eq!(status, WholesaleStatus::Approved);
        assert!(!status.is_pending());
    }

    #[test]
    fn deserializes_pending_request() {
        let json = r#"{
            "id": 4,
            "retailer": { "id": 2, "name": "Campus Mart", "role": "RETAILER" },
            "product": { "id": 3, "name": "Amul Butter 500g", "category": "Dairy" },
            "quantity": 50,
            "status": "PENDING",
            "createdAt": "2026-08-01T09:00:00"
        }"#;
        let order: WholesaleOrder = serde_json::from_str(json).unwrap();
        assert!(order.status.is_pending());
        assert_eq!(order.product.name, "Amul Butter 500g");
    }
}
