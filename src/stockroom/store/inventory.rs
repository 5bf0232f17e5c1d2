use crate::error::{Result, StockError};
use crate::model::{Product, ProductId, ProductUpdate};
use tracing::warn;

/// Outcome of [`Inventory::add_all`].
#[derive(Debug, Default)]
pub struct BulkLoad {
    pub added: usize,
    /// Products dropped because an earlier record already used their id.
    pub rejected: Vec<Product>,
}

/// The authoritative, insertion-ordered product collection.
///
/// Lookups are linear scans. At most one product per id is ever held.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn add(&mut self, product: Product) -> Result<()> {
        if self.holds(&product) {
            return Err(StockError::DuplicateId(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    /// Adds every product under the same rule as [`Inventory::add`], keeping the
    /// first of any repeated id.
    pub fn add_all<I>(&mut self, products: I) -> BulkLoad
    where
        I: IntoIterator<Item = Product>,
    {
        let mut report = BulkLoad::default();
        for product in products {
            if self.holds(&product) {
                warn!(id = product.id, name = %product.name, "Skipping product with duplicate id");
                report.rejected.push(product);
            } else {
                self.products.push(product);
                report.added += 1;
            }
        }
        report
    }

    pub fn remove(&mut self, id: ProductId) -> Result<Product> {
        let pos = self.position(id).ok_or(StockError::NotFound(id))?;
        Ok(self.products.remove(pos))
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First product, in store order, whose name contains `term` (case-sensitive).
    pub fn find_by_name(&self, term: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name.contains(term))
    }

    pub fn find_all_by_name(&self, term: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.name.contains(term))
            .collect()
    }

    /// Overwrites name, quantity and price of the product keyed by `id`.
    /// `new_data.id` is ignored.
    pub fn update(&mut self, id: ProductId, new_data: &Product) -> Result<&Product> {
        self.apply(id, &ProductUpdate::from(new_data))
    }

    pub fn apply(&mut self, id: ProductId, update: &ProductUpdate) -> Result<&Product> {
        let pos = self.position(id).ok_or(StockError::NotFound(id))?;
        let product = &mut self.products[pos];
        update.apply_to(product);
        Ok(&*product)
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Whether a product with the same identity is already stored.
    fn holds(&self, product: &Product) -> bool {
        self.products.iter().any(|p| p.same_identity(product))
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}
