use crate::catalog::InventoryItem;
use crate::checkout::{CheckoutItem, CheckoutPayload};
use crate::error::CartError;
use crate::money::Money;

/// One product's accumulated selection.
///
/// `unit_price` and `display_name` are fixed when the line is first created;
/// later catalog changes never touch an existing line.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product_id: i64,
    pub display_name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// The in-memory cart for one browsing session.
///
/// Lines are keyed by product id and kept in insertion order for display.
/// The cart is never persisted; it lives and dies with the session that
/// owns it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn quantity(&self, product_id: i64) -> u32 {
        self.line(product_id).map_or(0, |line| line.quantity)
    }

    /// Adds one unit of `item` to the cart.
    ///
    /// The first add creates the line, capturing the item's price and name
    /// once. The increment is rejected with `CapacityExceeded` when it would
    /// push the quantity past `item.stock`, leaving the cart unchanged.
    ///
    /// `item.stock` is the caller's snapshot from the last inventory fetch.
    /// The check is advisory only; the backend re-validates stock when the
    /// order is created.
    pub fn add_item(&mut self, item: &InventoryItem) -> Result<(), CartError> {
        let product_id = item.product.id;
        if self.quantity(product_id) + 1 > item.stock {
            return Err(CartError::CapacityExceeded {
                product_id,
                stock: item.stock,
            });
        }

        match self.position(product_id) {
            Some(index) => self.lines[index].quantity += 1,
            None => self.lines.push(CartLine {
                product_id,
                display_name: item.product.name.clone(),
                unit_price: item.price,
                quantity: 1,
            }),
        }
        Ok(())
    }

    /// Removes one unit of the product; the line is deleted when its
    /// quantity reaches zero. A product that is not in the cart is a
    /// defined failure, `NotFound`.
    pub fn remove_item(&mut self, product_id: i64) -> Result<(), CartError> {
        let Some(index) = self.position(product_id) else {
            return Err(CartError::NotFound { product_id });
        };

        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        Ok(())
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Produces the payload handed to the payment step.
    ///
    /// `retailer_id` is the shop being browsed at checkout time; it is
    /// ambient context, not part of the cart itself. Fails with `Empty` on
    /// an empty cart so no navigation happens.
    pub fn checkout_payload(&self, retailer_id: i64) -> Result<CheckoutPayload, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }

        Ok(CheckoutPayload {
            cart_items: self
                .lines
                .iter()
                .map(|line| CheckoutItem {
                    id: line.product_id,
                    quantity: line.quantity,
                    price: line.unit_price,
                    name: line.display_name.clone(),
                })
                .collect(),
            total_amount: self.total(),
            retailer_id,
        })
    }

    fn position(&self, product_id: i64) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id == product_id)
    }
}
