use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::session::User;

/// A product rating submitted from the order-history page.
///
/// Built through [`FeedbackRequest::new`] so an out-of-range rating never
/// reaches the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub customer_id: i64,
    pub product_id: i64,
    pub order_id: i64,
    pub rating: u8,
    pub comment: String,
}

impl FeedbackRequest {
    pub fn new(
        customer_id: i64,
        product_id: i64,
        order_id: i64,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self, FeedbackError> {
        if !(1..=5).contains(&rating) {
            return Err(FeedbackError::InvalidRating(rating));
        }
        Ok(FeedbackRequest {
            customer_id,
            product_id,
            order_id,
            rating,
            comment: comment.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidRating(u8),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackError::InvalidRating(rating) => {
                write!(f, "rating must be between 1 and 5, got {}", rating)
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// A stored rating as read back from the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub feedback_id: i64,
    pub product: Product,
    pub customer: User,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(FeedbackRequest::new(1, 2, 3, 0, "").is_err());
        assert!(FeedbackRequest::new(1, 2, 3, 6, "").is_err());
        for rating in 1..=5 {
            assert!(FeedbackRequest::new(1, 2, 3, rating, "fine").is_ok());
        }
    }

    #[test]
    fn wire_shape() {
        let request = FeedbackRequest::new(42, 3, 5, 4, "Fresh and on time").unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "customerId": 42,
                "productId": 3,
                "orderId": 5,
                "rating": 4,
                "comment": "Fresh and on time"
            })
        );
    }
}
