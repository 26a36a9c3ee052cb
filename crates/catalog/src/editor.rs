//! The single owned editor aggregate and its transition function.
//!
//! `EditorState::apply` takes the current state by reference and returns the
//! next one, so a rejected event leaves the caller holding the old state.
//! Mode changes reset the draft explicitly at each transition site.

use crate::{
    domain::{Product, ProductField, ProductId},
    error::ValidationError,
    form::{FormController, FormMode},
    store::Catalog,
};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    SetField { field: ProductField, value: String },
    Submit,
    Edit(Product),
    Delete(ProductId),
    Clear,
}

impl EditorEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::SetField { .. } => "set_field",
            EditorEvent::Submit => "submit",
            EditorEvent::Edit(_) => "edit",
            EditorEvent::Delete(_) => "delete",
            EditorEvent::Clear => "clear",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    catalog: Catalog,
    form: FormController,
}

impl EditorState {
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            form: FormController::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn draft(&self) -> &Product {
        self.form.draft()
    }

    pub fn mode(&self) -> &FormMode {
        self.form.mode()
    }

    pub fn submit_label(&self) -> &'static str {
        self.form.submit_label()
    }

    pub fn apply(&self, event: EditorEvent) -> Result<EditorState, ValidationError> {
        let event_name = event.name();
        let mut next = self.clone();

        match event {
            EditorEvent::SetField { field, value } => next.form.set_field(field, &value),
            EditorEvent::Submit => {
                next.catalog = next.form.submit(&self.catalog)?;
            }
            EditorEvent::Edit(product) => next.form.select_for_edit(&product),
            EditorEvent::Delete(id) => next.catalog = self.catalog.remove(&id),
            EditorEvent::Clear => next.form.clear(),
        }

        tracing::debug!(
            event = event_name,
            products = next.catalog.len(),
            editing = next.mode().is_edit(),
            "applied editor event"
        );
        Ok(next)
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
