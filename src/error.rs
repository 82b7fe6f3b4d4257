use std::fmt;

/// Failures raised by cart mutations and checkout preparation.
///
/// All of these are advisory, user-facing conditions: the cart is left
/// untouched by the failed operation and the backend remains the authority
/// on stock at order-creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The increment would push the line past the caller's stock snapshot.
    CapacityExceeded { product_id: i64, stock: u32 },
    /// The product is not known to the cart or the current shop snapshot.
    NotFound { product_id: i64 },
    /// Checkout was attempted on an empty cart.
    Empty,
    /// Checkout was attempted before any shop was visited.
    NoShopSelected,
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartError::CapacityExceeded { product_id, stock } => write!(
                f,
                "not enough stock for product {} (only {} available)",
                product_id, stock
            ),
            CartError::NotFound { product_id } => {
                write!(f, "unknown product {}", product_id)
            }
            CartError::Empty => write!(f, "cart is empty"),
            CartError::NoShopSelected => write!(f, "no shop selected for checkout"),
        }
    }
}

impl std::error::Error for CartError {}
