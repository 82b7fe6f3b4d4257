mod cart;
mod catalog;
mod checkout;
mod customer;
mod error;
mod feedback;
mod geo;
mod money;
mod orders;
mod session;
mod wholesale;

#[cfg(feature = "http")]
mod api;

pub use cart::{Cart, CartLine};
pub use catalog::{
    InventoryItem, InventoryUpsert, NewProduct, Product, StockLevel, LOW_STOCK_THRESHOLD,
};
pub use checkout::{
    CardDetails, CardError, CheckoutItem, CheckoutPayload, OrderItemRequest, OrderRequest,
    PaymentMode,
};
pub use customer::{CustomerSession, CART_UPDATED, CHECKOUT_READY, SHOP_VISITED};
pub use error::CartError;
pub use feedback::{Feedback, FeedbackError, FeedbackRequest};
pub use geo::{haversine_km, rank_by_distance, Coordinates, RankedShop, Shop, EARTH_RADIUS_KM};
pub use money::Money;
pub use orders::{sort_newest_first, Order, OrderItem, OrderStatus};
pub use session::{AuthError, Credentials, Role, Session, SignupRequest, User};
pub use wholesale::{StockRequest, WholesaleOrder, WholesaleStatus};

#[cfg(feature = "http")]
pub use api::{ApiClient, ApiError};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
