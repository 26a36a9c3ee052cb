//! In-memory product catalog: the store, the form controller, the table
//! renderer, and the editor aggregate that ties them together.

pub mod domain;
pub mod editor;
pub mod error;
pub mod form;
pub mod store;
pub mod table;

pub use domain::{Product, ProductField, ProductId};
pub use editor::{EditorEvent, EditorState};
pub use error::ValidationError;
pub use form::{FormController, FormMode};
pub use store::Catalog;
pub use table::{rows, RowView, COLUMNS};
