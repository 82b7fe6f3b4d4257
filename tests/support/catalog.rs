use livemart_client::{InventoryItem, Money, Product};

pub fn product(id: i64, name: &str, category: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: None,
        image: None,
    }
}

pub fn shelf_item(id: i64, name: &str, rupees: f64, stock: u32) -> InventoryItem {
    InventoryItem {
        inventory_id: id * 100,
        product: product(id, name, "Grocery"),
        price: Money::from_rupees(rupees),
        stock,
    }
}

/// The shelf of the demo shop used across the flow tests.
pub fn demo_shelf() -> Vec<InventoryItem> {
    vec![
        shelf_item(1, "Rice 1kg", 10.0, 5),
        shelf_item(2, "Milk 1L", 25.5, 3),
        shelf_item(3, "Amul Butter 500g", 54.5, 2),
    ]
}
