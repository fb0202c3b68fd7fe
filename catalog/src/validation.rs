//! Form validation for adding and editing products.
//!
//! A [`ProductDraft`] holds the form fields as typed. Validation checks every
//! field and reports all problems together; only a clean draft becomes a
//! [`NewProduct`] that may be sent to the catalog.

use crate::numeric::{parse_float, parse_int};
use crate::types::{Category, NewProduct, Product};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Minimum product name length, in characters, after trimming
pub const MIN_NAME_CHARS: usize = 3;

/// Form fields that can fail validation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Product name
    Name,
    /// Category selector
    Category,
    /// Price input
    Price,
    /// Quantity input
    Quantity,
}

impl Field {
    /// Form field key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every failed field with its message
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("{} field(s) failed validation: {}", .errors.len(), render(.errors))]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    /// Message for one field, if it failed
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Failed fields in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Number of failed fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when nothing failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn render(errors: &BTreeMap<Field, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Messages shown next to invalid fields
pub mod messages {
    /// Name missing or blank
    pub const NAME_REQUIRED: &str = "Tên sản phẩm bắt buộc.";
    /// Name shorter than the minimum
    pub const NAME_TOO_SHORT: &str = "Tên sản phẩm phải có ít nhất 3 ký tự.";
    /// Price missing, unparseable, or not positive
    pub const PRICE_NOT_POSITIVE: &str = "Giá phải là số dương.";
    /// Quantity missing, unparseable, or negative
    pub const QUANTITY_NOT_NON_NEGATIVE: &str = "Số lượng phải là số nguyên không âm.";
    /// No category chosen
    pub const CATEGORY_REQUIRED: &str = "Phải chọn danh mục.";
}

/// Raw add/edit form input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDraft {
    /// Name as typed
    pub name: String,
    /// Selected category
    pub category: Option<Category>,
    /// Price as typed
    pub price: String,
    /// Quantity as typed
    pub quantity: String,
    /// Description as typed
    pub description: String,
}

impl Default for ProductDraft {
    /// The blank add form; the category selector starts on the first entry
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Some(Category::Electronics),
            price: String::new(),
            quantity: String::new(),
            description: String::new(),
        }
    }
}

impl ProductDraft {
    /// The edit form, pre-filled from an existing product
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: Some(product.category),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            description: product.description.clone(),
        }
    }

    /// Check every field and build the product fields.
    ///
    /// Name and description are trimmed on success.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every field that failed.
    pub fn validate(&self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add(Field::Name, messages::NAME_REQUIRED);
        } else if name.chars().count() < MIN_NAME_CHARS {
            errors.add(Field::Name, messages::NAME_TOO_SHORT);
        }

        let price = parse_float(&self.price).filter(|p| p.is_finite() && *p > 0.0);
        if price.is_none() {
            errors.add(Field::Price, messages::PRICE_NOT_POSITIVE);
        }

        let quantity = parse_int(&self.quantity).and_then(|q| u32::try_from(q).ok());
        if quantity.is_none() {
            errors.add(Field::Quantity, messages::QUANTITY_NOT_NON_NEGATIVE);
        }

        if self.category.is_none() {
            errors.add(Field::Category, messages::CATEGORY_REQUIRED);
        }

        match (price, quantity, self.category) {
            (Some(price), Some(quantity), Some(category)) if errors.is_empty() => Ok(NewProduct {
                name: name.to_string(),
                category,
                price,
                quantity,
                description: self.description.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}
