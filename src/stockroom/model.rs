use serde::{Deserialize, Serialize};
use std::fmt;

pub type ProductId = i64;

/// A single inventory record.
///
/// `id` is the identity key: the store never holds two products with the same id,
/// and updates never change it. `PartialEq` compares every field; use
/// [`Product::same_identity`] when only identity matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    /// Unit price in the smallest currency unit.
    pub price: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, quantity: i64, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn same_identity(&self, other: &Product) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<5} {:<15} {:<8} {:<8}",
            self.id, self.name, self.quantity, self.price
        )
    }
}

/// Partial update for a product. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<i64>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.price.is_none()
    }

    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

impl From<&Product> for ProductUpdate {
    fn from(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            quantity: Some(product.quantity),
            price: Some(product.price),
        }
    }
}
