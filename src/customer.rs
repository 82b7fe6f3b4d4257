use serde_json::json;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::cart::Cart;
use crate::catalog::InventoryItem;
use crate::checkout::CheckoutPayload;
use crate::error::CartError;

pub const SHOP_VISITED: &str = "ShopVisited";
pub const CART_UPDATED: &str = "CartUpdated";
pub const CHECKOUT_READY: &str = "CheckoutReady";

/// The ambient state of one customer browsing session: the shop currently
/// being visited, the inventory snapshot fetched for it, and the cart.
///
/// Mutations queue change events and emit them only after the mutation has
/// succeeded, so listeners never observe a rejected operation. Event
/// payloads are JSON strings.
pub struct CustomerSession {
    shop_id: Option<i64>,
    inventory: Vec<InventoryItem>,
    cart: Cart,
    queued_events: Vec<(String, String)>,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl Default for CustomerSession {
    fn default() -> Self {
        CustomerSession {
            shop_id: None,
            inventory: Vec::new(),
            cart: Cart::new(),
            queued_events: Vec::new(),
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        }
    }
}

impl CustomerSession {
    pub fn new() -> Self {
        CustomerSession::default()
    }

    pub fn shop_id(&self) -> Option<i64> {
        self.shop_id
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Switches to a shop, replacing the inventory snapshot with a freshly
    /// fetched one. The cart survives the switch; whichever shop is being
    /// browsed at checkout time becomes the order's retailer.
    pub fn visit_shop(&mut self, shop_id: i64, inventory: Vec<InventoryItem>) {
        self.shop_id = Some(shop_id);
        self.inventory = inventory;
        self.enqueue(SHOP_VISITED, json!({ "shopId": shop_id }).to_string());
        self.emit_queued_events();
    }

    /// Adds one unit of a listed item to the cart.
    pub fn add_to_cart(&mut self, item: &InventoryItem) -> Result<(), CartError> {
        self.cart.add_item(item)?;
        self.enqueue_cart_updated();
        self.emit_queued_events();
        Ok(())
    }

    /// Adds one more unit of a product already shown in the cart panel.
    ///
    /// The stock check runs against the current inventory snapshot rather
    /// than being bypassed; a product missing from the snapshot (for
    /// example after switching shops) is rejected.
    pub fn increment(&mut self, product_id: i64) -> Result<(), CartError> {
        let item = self
            .inventory
            .iter()
            .find(|item| item.product.id == product_id)
            .cloned()
            .ok_or(CartError::NotFound { product_id })?;
        self.add_to_cart(&item)
    }

    /// Removes one unit of the product from the cart.
    pub fn remove_from_cart(&mut self, product_id: i64) -> Result<(), CartError> {
        self.cart.remove_item(product_id)?;
        self.enqueue_cart_updated();
        self.emit_queued_events();
        Ok(())
    }

    /// Finalizes the cart into the payload handed to the payment step.
    /// The cart itself is left intact; it is abandoned by navigation, not
    /// cleared here.
    pub fn checkout(&mut self) -> Result<CheckoutPayload, CartError> {
        let retailer_id = self.shop_id.ok_or(CartError::NoShopSelected)?;
        let payload = self.cart.checkout_payload(retailer_id)?;
        self.enqueue(
            CHECKOUT_READY,
            json!({
                "retailerId": retailer_id,
                "totalAmount": payload.total_amount.as_rupees(),
                "lineCount": payload.cart_items.len(),
            })
            .to_string(),
        );
        self.emit_queued_events();
        Ok(payload)
    }

    /// Registers a listener for one of the session events. Payloads are the
    /// JSON strings this module queues.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    fn enqueue_cart_updated(&mut self) {
        let snapshot = self.cart_snapshot();
        self.enqueue(CART_UPDATED, snapshot);
    }

    fn enqueue(&mut self, event_type: &str, data: String) {
        self.queued_events.push((event_type.to_string(), data));
    }

    fn emit_queued_events(&mut self) {
        for (event_type, data) in self.queued_events.drain(..).collect::<Vec<_>>() {
            #[cfg(feature = "emitter")]
            self.emitter.emit(&event_type, data);
            #[cfg(not(feature = "emitter"))]
            let _ = (event_type, data);
        }
    }

    fn cart_snapshot(&self) -> String {
        let items: Vec<_> = self
            .cart
            .lines()
            .iter()
            .map(|line| {
                json!({
                    "id": line.product_id,
                    "name": line.display_name,
                    "price": line.unit_price.as_rupees(),
                    "quantity": line.quantity,
                    "subtotal": line.subtotal().as_rupees(),
                })
            })
            .collect();
        json!({ "items": items, "total": self.cart.total().as_rupees() }).to_string()
    }
}
