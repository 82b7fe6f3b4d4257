mod support;

use livemart_client::{
    sort_newest_first, InventoryUpsert, Money, Order, OrderStatus, StockLevel, StockRequest,
    WholesaleOrder,
};
use support::catalog::shelf_item;

fn orders_json() -> &'static str {
    r#"[
        {
            "orderId": 3,
            "customer": { "id": 42, "name": "Asha", "role": "CUSTOMER" },
            "items": [{
                "orderItemId": 1,
                "product": { "id": 1, "name": "Rice 1kg", "category": "Grocery" },
                "quantity": 2,
                "priceAtPurchase": 10.0
            }],
            "totalAmount": 20.0,
            "paymentMode": "CREDIT_CARD",
            "orderStatus": "placed"
        },
        {
            "orderId": 11,
            "customer": { "id": 43, "name": "Ravi", "role": "CUSTOMER" },
            "items": [],
            "totalAmount": 54.5,
            "paymentMode": "CREDIT_CARD",
            "orderStatus": "DELIVERED"
        },
        {
            "orderId": 7,
            "customer": { "id": 42, "name": "Asha", "role": "CUSTOMER" },
            "items": [],
            "totalAmount": 25.5,
            "paymentMode": "CASH_ON_DELIVERY",
            "orderStatus": "PACKED"
        }
    ]"#
}

#[test]
fn fulfillment_queue_newest_first() {
    let mut orders: Vec<Order> = serde_json::from_str(orders_json()).unwrap();
    sort_newest_first(&mut orders);

    let ids: Vec<i64> = orders.iter().map(|o| o.order_id).collect();
    assert_eq!(ids, vec![11, 7, 3]);
}

#[test]
fn fulfillment_walks_placed_to_delivered() {
    let orders: Vec<Order> = serde_json::from_str(orders_json()).unwrap();

    let placed = orders.iter().find(|o| o.order_id == 3).unwrap();
    assert_eq!(placed.order_status.next(), Some(OrderStatus::Packed));

    let packed = orders.iter().find(|o| o.order_id == 7).unwrap();
    assert_eq!(packed.order_status.next(), Some(OrderStatus::Delivered));

    let delivered = orders.iter().find(|o| o.order_id == 11).unwrap();
    assert_eq!(delivered.order_status.next(), None);
}

#[test]
fn shelf_status_drives_restock_request() {
    let shelf = vec![
        shelf_item(1, "Rice 1kg", 10.0, 20),
        shelf_item(3, "Amul Butter 500g", 54.5, 2),
    ];

    let low: Vec<_> = shelf
        .iter()
        .filter(|item| item.stock_level() == StockLevel::Low)
        .collect();
    assert_eq!(low.len(), 1);

    let request = StockRequest {
        retailer_id: 2,
        product_id: low[0].product.id,
        quantity: 50,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "retailerId": 2, "productId": 3, "quantity": 50 })
    );
}

#[test]
fn wholesaler_approval_queue() {
    let pending: Vec<WholesaleOrder> = serde_json::from_str(
        r#"[
            {
                "id": 4,
                "retailer": { "id": 2, "name": "Campus Mart", "role": "RETAILER" },
                "product": { "id": 3, "name": "Amul Butter 500g", "category": "Dairy" },
                "quantity": 50,
                "status": "PENDING"
            },
            {
                "id": 5,
                "retailer": { "id": 2, "name": "Campus Mart", "role": "RETAILER" },
                "product": { "id": 1, "name": "Rice 1kg", "category": "Grocery" },
                "quantity": 10,
                "status": "APPROVED"
            }
        ]"#,
    )
    .unwrap();

    let queue: Vec<_> = pending.iter().filter(|o| o.status.is_pending()).collect();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, 4);
}

#[test]
fn stock_update_form_payload() {
    let upsert = InventoryUpsert {
        retailer_id: 2,
        product_id: 1,
        price: Money::from_rupees(11.0),
        stock: 40,
    };
    assert_eq!(
        serde_json::to_value(&upsert).unwrap(),
        serde_json::json!({ "retailerId": 2, "productId": 1, "price": 11.0, "stock": 40 })
    );
}
