use tracing::debug;

use crate::models::Product;
use crate::store::ProductStore;

/// The records every inventory process starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Teclado Mecánico", 85.50, 10),
        Product::new(2, "Ratón Gaming", 45.00, 25),
    ]
}

/// A store holding [`seed_products`] in order.
pub fn seeded_store() -> ProductStore {
    let products = seed_products();
    debug!(count = products.len(), "Seeding in-memory inventory");
    ProductStore::with_records(products)
}
