//! Ordered in-memory product list. Every mutation returns a fresh `Catalog`
//! and leaves the receiver untouched.

use std::sync::Arc;

use crate::domain::{seed_products, Product, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    pub fn new(products: impl Into<Vec<Product>>) -> Self {
        let products: Vec<Product> = products.into();
        Self {
            products: products.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// First entry carrying `id`.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Appends without a uniqueness check; a colliding id is only logged.
    pub fn add(&self, product: Product) -> Self {
        if self.contains(&product.id) {
            tracing::warn!(
                product_id = %product.id,
                "adding product whose id is already in the catalog"
            );
        }
        let mut next = self.products.to_vec();
        next.push(product);
        Self::new(next)
    }

    /// Replaces every entry whose id matches, keeping positions.
    pub fn update(&self, product: Product) -> Self {
        let mut matched = 0usize;
        let next: Vec<Product> = self
            .products
            .iter()
            .map(|existing| {
                if existing.id == product.id {
                    matched += 1;
                    product.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();

        if matched == 0 {
            tracing::debug!(product_id = %product.id, "update matched no product");
        }
        Self::new(next)
    }

    /// Drops every entry whose id matches.
    pub fn remove(&self, id: &ProductId) -> Self {
        let next: Vec<Product> = self
            .products
            .iter()
            .filter(|p| &p.id != id)
            .cloned()
            .collect();

        if next.len() == self.len() {
            tracing::debug!(product_id = %id, "remove matched no product");
        }
        Self::new(next)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
