use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A catalog record. `Default` is the empty product the form resets to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ProductID")]
    pub id: ProductId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Design")]
    pub design: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

impl Product {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Reads one field as display text. Price uses the shortest form that
    /// round-trips, so `500.0` reads back as `500`.
    pub fn field_text(&self, field: ProductField) -> String {
        match field {
            ProductField::ProductId => self.id.0.clone(),
            ProductField::Name => self.name.clone(),
            ProductField::Design => self.design.clone(),
            ProductField::Color => self.color.clone(),
            ProductField::Size => self.size.clone(),
            ProductField::Material => self.material.clone(),
            ProductField::Price => format_price(self.price),
        }
    }
}

pub fn format_price(price: f64) -> String {
    format!("{price}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    ProductId,
    Name,
    Design,
    Color,
    Size,
    Material,
    Price,
}

impl ProductField {
    pub const ALL: [ProductField; 7] = [
        ProductField::ProductId,
        ProductField::Name,
        ProductField::Design,
        ProductField::Color,
        ProductField::Size,
        ProductField::Material,
        ProductField::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductField::ProductId => "Product ID",
            ProductField::Name => "Name",
            ProductField::Design => "Design",
            ProductField::Color => "Color",
            ProductField::Size => "Size",
            ProductField::Material => "Material",
            ProductField::Price => "Price",
        }
    }

    pub fn is_numeric(self) -> bool {
        self == ProductField::Price
    }
}

/// The two records every new session starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::from("P001"),
            name: "T-Shirt".into(),
            design: "Graphic".into(),
            color: "Red".into(),
            size: "M".into(),
            material: "Cotton".into(),
            price: 500.0,
        },
        Product {
            id: ProductId::from("P002"),
            name: "Jeans".into(),
            design: "Slim Fit".into(),
            color: "Blue".into(),
            size: "L".into(),
            material: "Denim".into(),
            price: 1200.0,
        },
    ]
}
