//! Draft product plus the create/edit selector.

use crate::{
    domain::{Product, ProductField, ProductId},
    error::ValidationError,
    store::Catalog,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        target: ProductId,
    },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Product",
            FormMode::Edit { .. } => "Update Product",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    draft: Product,
    mode: FormMode,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Product {
        &self.draft
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    pub fn select_for_edit(&mut self, product: &Product) {
        self.mode = FormMode::Edit {
            target: product.id.clone(),
        };
        self.draft = product.clone();
    }

    pub fn clear(&mut self) {
        self.mode = FormMode::Create;
        self.draft = Product::empty();
    }

    /// Overwrites one draft field. Price text is trimmed: empty means zero,
    /// anything that is not a finite number leaves the price as it was.
    pub fn set_field(&mut self, field: ProductField, value: &str) {
        match field {
            ProductField::ProductId => self.draft.id = ProductId::from(value),
            ProductField::Name => self.draft.name = value.to_string(),
            ProductField::Design => self.draft.design = value.to_string(),
            ProductField::Color => self.draft.color = value.to_string(),
            ProductField::Size => self.draft.size = value.to_string(),
            ProductField::Material => self.draft.material = value.to_string(),
            ProductField::Price => match parse_price(value) {
                Some(price) => self.draft.price = price,
                None => {
                    tracing::debug!(input = value, "ignoring non-numeric price input");
                }
            },
        }
    }

    /// Commits the draft into `catalog`. On failure nothing changes, the
    /// form included.
    pub fn submit(&mut self, catalog: &Catalog) -> Result<Catalog, ValidationError> {
        if self.draft.id.is_empty() {
            return Err(ValidationError::MissingProductId);
        }

        let draft = self.draft.clone();
        let next = if self.mode.is_edit() {
            catalog.update(draft)
        } else {
            catalog.add(draft)
        };
        self.clear();
        Ok(next)
    }
}

fn parse_price(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|price| price.is_finite())
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
