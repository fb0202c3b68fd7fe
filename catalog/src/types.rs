//! Domain types for the product catalog.
//!
//! A catalog is an ordered list of products (newest first) plus the next
//! identifier to hand out. Products are created, replaced, removed, or the
//! whole list swapped, only through [`CatalogAction`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a product
///
/// Positive, assigned by the catalog, never reused after deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// The first identifier an empty catalog assigns
    pub const FIRST: Self = Self(1);

    /// Wraps a raw identifier
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string names no known category.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(String);

/// Product category: a closed set of five labels
///
/// Serialized and displayed with the Vietnamese shop label. Parsing and
/// deserializing go through [`FromStr`], which also takes the English name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    /// "Điện tử"
    #[serde(rename = "Điện tử")]
    Electronics,
    /// "Quần áo"
    #[serde(rename = "Quần áo")]
    Clothing,
    /// "Đồ ăn"
    #[serde(rename = "Đồ ăn")]
    Food,
    /// "Sách"
    #[serde(rename = "Sách")]
    Books,
    /// "Khác"
    #[serde(rename = "Khác")]
    Other,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Self; 5] = [
        Self::Electronics,
        Self::Clothing,
        Self::Food,
        Self::Books,
        Self::Other,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Điện tử",
            Self::Clothing => "Quần áo",
            Self::Food => "Đồ ăn",
            Self::Books => "Sách",
            Self::Other => "Khác",
        }
    }

    /// English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Food => "Food",
            Self::Books => "Books",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == wanted || c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Product fields as submitted by a form, before an id is assigned
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product name
    pub name: String,
    /// Category
    pub category: Category,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: u32,
    /// Free text, may be empty
    pub description: String,
}

/// A catalog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Category
    pub category: Category,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: u32,
    /// Free text, may be empty
    pub description: String,
}

impl Product {
    /// Attach an identifier to submitted fields
    #[must_use]
    pub fn from_new(id: ProductId, fields: NewProduct) -> Self {
        let NewProduct {
            name,
            category,
            price,
            quantity,
            description,
        } = fields;

        Self {
            id,
            name,
            category,
            price,
            quantity,
            description,
        }
    }
}

/// State of the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Products, newest first
    pub products: Vec<Product>,
    /// Identifier the next `Add` will assign
    pub next_id: ProductId,
}

impl CatalogState {
    /// Creates an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: ProductId::FIRST,
        }
    }

    /// Creates a catalog holding `products`
    ///
    /// The id counter restarts at `max(1, len + 1)`, the same rule
    /// [`CatalogAction::Set`] applies.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = ProductId::new(products.len() as u64 + 1);
        Self { products, next_id }
    }

    /// Returns the number of products
    #[must_use]
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Returns a product by ID
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Checks if a product exists
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutations the catalog accepts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CatalogAction {
    /// Prepend a new product with the next id
    Add(NewProduct),

    /// Replace the product with the same id; ignored if absent
    Update(Product),

    /// Remove a product; ignored if absent
    Delete {
        /// Product to remove
        id: ProductId,
    },

    /// Replace the whole collection
    ///
    /// Ids in the new list are taken as given; keeping them unique is the
    /// sender's job.
    Set(Vec<Product>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_label_and_name() {
        assert_eq!("Sách".parse::<Category>(), Ok(Category::Books));
        assert_eq!(" books ".parse::<Category>(), Ok(Category::Books));
        assert_eq!("Điện tử".parse::<Category>(), Ok(Category::Electronics));
        assert!("Toys".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Đồ ăn\"");

        let parsed: Category = serde_json::from_str("\"Clothing\"").unwrap();
        assert_eq!(parsed, Category::Clothing);

        let trimmed: Category = serde_json::from_str("\" Sách \"").unwrap();
        assert_eq!(trimmed, Category::Books);
        let lowercase: Category = serde_json::from_str("\"books\"").unwrap();
        assert_eq!(lowercase, Category::Books);
        let unknown = serde_json::from_str::<Category>("\"Toys\"").unwrap_err();
        assert!(unknown.to_string().contains("Unknown category: Toys"));
    }

    #[test]
    fn with_products_restarts_counter() {
        assert_eq!(CatalogState::with_products(Vec::new()).next_id, ProductId::FIRST);

        let product = Product::from_new(
            ProductId::new(40),
            NewProduct {
                name: "Bút bi".to_string(),
                category: Category::Other,
                price: 5000.0,
                quantity: 3,
                description: String::new(),
            },
        );
        let state = CatalogState::with_products(vec![product]);
        assert_eq!(state.next_id, ProductId::new(2));
        assert!(state.contains(ProductId::new(40)));
    }

    #[test]
    fn product_id_display_and_next() {
        let id = ProductId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.next().get(), 8);
    }
}
