use crate::models::Product;

/// Append-only, insertion-ordered product list held in process memory.
///
/// Lookups scan linearly and return the first match; ids are not required
/// to be unique.
#[derive(Debug, Default)]
pub struct ProductStore {
    records: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Product>) -> Self {
        Self { records }
    }

    pub fn list_all(&self) -> &[Product] {
        &self.records
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Product> {
        self.records.iter().find(|p| p.id == id)
    }

    pub fn append(&mut self, product: Product) {
        self.records.push(product);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
