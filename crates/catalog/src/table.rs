//! Row views derived from a catalog snapshot. Holds no state of its own.

use crate::{
    domain::{format_price, Product, ProductId},
    editor::EditorEvent,
    store::Catalog,
};

pub const COLUMNS: [&str; 8] = [
    "Product ID",
    "Name",
    "Design",
    "Color",
    "Size",
    "Material",
    "Price",
    "Actions",
];

#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    index: usize,
    product: &'a Product,
}

impl<'a> RowView<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn key(&self) -> &'a ProductId {
        &self.product.id
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn cells(&self) -> [String; 7] {
        let p = self.product;
        [
            p.id.to_string(),
            p.name.clone(),
            p.design.clone(),
            p.color.clone(),
            p.size.clone(),
            p.material.clone(),
            format_price(p.price),
        ]
    }

    pub fn edit_action(&self) -> EditorEvent {
        EditorEvent::Edit(self.product.clone())
    }

    pub fn delete_action(&self) -> EditorEvent {
        EditorEvent::Delete(self.product.id.clone())
    }
}

/// One row per entry, in catalog order. The iterator is `Clone`, and calling
/// `rows` again restarts from the top.
pub fn rows(catalog: &Catalog) -> impl Iterator<Item = RowView<'_>> + Clone + '_ {
    catalog
        .iter()
        .enumerate()
        .map(|(index, product)| RowView { index, product })
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
