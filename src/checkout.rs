use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One line of the checkout handoff, as accumulated by the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub id: i64,
    pub quantity: u32,
    pub price: Money,
    pub name: String,
}

/// The opaque navigation argument handed from the cart to the payment step.
///
/// This is in-memory state, not a wire format, but it serializes with the
/// same field names the frontend used so it can be stashed in history state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub cart_items: Vec<CheckoutItem>,
    pub total_amount: Money,
    pub retailer_id: i64,
}

/// Payment instrument selected on the payment form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "CREDIT_CARD")]
    CreditCard,
    #[serde(rename = "CASH_ON_DELIVERY")]
    CashOnDelivery,
}

/// One item of the order-creation request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: u32,
    pub price_at_purchase: Money,
}

/// The order-creation request posted to the backend.
///
/// Field names and nesting must stay exactly as they are; the backend
/// deserializes this shape verbatim.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: i64,
    pub retailer_id: i64,
    pub total_amount: Money,
    pub payment_mode: PaymentMode,
    pub items: Vec<OrderItemRequest>,
}

impl OrderRequest {
    /// Builds the backend request from a checkout payload once the customer
    /// has confirmed payment.
    pub fn from_payload(
        customer_id: i64,
        payload: &CheckoutPayload,
        payment_mode: PaymentMode,
    ) -> Self {
        OrderRequest {
            customer_id,
            retailer_id: payload.retailer_id,
            total_amount: payload.total_amount,
            payment_mode,
            items: payload
                .cart_items
                .iter()
                .map(|item| OrderItemRequest {
                    product_id: item.id,
                    quantity: item.quantity,
                    price_at_purchase: item.price,
                })
                .collect(),
        }
    }
}

/// Card fields captured by the payment form.
///
/// Deliberately not serializable: the mock payment step never transmits
/// card details anywhere.
#[derive(Clone, Debug, Default)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub name: String,
}

impl CardDetails {
    /// Presence-only validation, matching the form's `required` fields.
    pub fn validate(&self) -> Result<(), CardError> {
        for (field, value) in [
            ("card number", &self.card_number),
            ("expiry", &self.expiry),
            ("cvv", &self.cvv),
            ("name", &self.name),
        ] {
            if value.trim().is_empty() {
                return Err(CardError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    MissingField(&'static str),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardError::MissingField(field) => write!(f, "missing {}", field),
        }
    }
}

impl std::error::Error for CardError {}
