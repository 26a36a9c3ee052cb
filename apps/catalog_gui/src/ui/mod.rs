//! UI layer for the catalog editor: app shell, form, product table, and alert.

pub mod app;

pub use app::{CatalogEditorApp, StartupConfig};
