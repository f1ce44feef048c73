//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

/// Errors related to product construction.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// The unit price was below zero.
    #[error("Product {0} has a negative unit price")]
    NegativePrice(ProductId),
}

/// Externally assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
///
/// A catalog entry as the cart sees it: identity, display name, category
/// label and a unit price. Products are immutable once constructed; the
/// catalog owns the canonical records.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    id: ProductId,
    name: String,
    category: String,
    price: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError::NegativePrice`] if the unit price is below zero.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Result<Self, ProductError> {
        if price.is_negative() {
            return Err(ProductError::NegativePrice(id));
        }

        Ok(Product {
            id,
            name: name.into(),
            category: category.into(),
            price,
        })
    }

    /// Get the product identifier.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Get the display name of the product.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the category label of the product.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the unit price of the product.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}
