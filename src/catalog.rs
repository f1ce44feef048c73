//! Product Catalog
//!
//! Read-only product lookup, with an in-memory implementation that can be
//! loaded from YAML catalog files.

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;

use crate::products::{Product, ProductError, ProductId};

/// Read-only provider of product records, queryable by identifier.
pub trait ProductSource<'a> {
    /// Look up a product by its identifier.
    fn product(&self, id: ProductId) -> Option<&Product<'a>>;
}

/// Catalog construction and parsing errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading catalog files
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Two records share a product identifier
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Invalid product data
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Product records
    products: Vec<ProductRecord>,
}

/// Product record as written in catalog YAML
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product category
    pub category: String,

    /// Product price (e.g., "2.99 GBP")
    pub price: String,
}

impl TryFrom<ProductRecord> for Product<'_> {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&record.price)?;

        Ok(Product::new(
            record.id,
            record.name,
            record.category,
            Money::from_minor(minor_units, currency),
        )?)
    }
}

/// In-memory product catalog keyed by [`ProductId`].
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    products: FxHashMap<ProductId, Product<'a>>,
}

impl<'a> Catalog<'a> {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: FxHashMap::default(),
        }
    }

    /// Create a catalog from an iterator of products.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::DuplicateProduct`] if two products share an
    /// identifier.
    pub fn with_products(
        products: impl IntoIterator<Item = Product<'a>>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();

        for product in products {
            catalog.insert(product)?;
        }

        Ok(catalog)
    }

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::DuplicateProduct`] if a product with the
    /// same identifier is already present.
    pub fn insert(&mut self, product: Product<'a>) -> Result<(), CatalogError> {
        let id = product.id();

        if self.products.contains_key(&id) {
            return Err(CatalogError::DuplicateProduct(id));
        }

        self.products.insert(id, product);

        Ok(())
    }

    /// Parse a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the YAML is malformed, a price or
    /// currency cannot be parsed, or two records share an identifier.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(yaml)?;

        Self::with_products(
            file.products
                .into_iter()
                .map(Product::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )
    }

    /// Read and parse a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Iterate over the products in the given category.
    pub fn by_category<'s>(&'s self, category: &'s str) -> impl Iterator<Item = &'s Product<'a>> {
        self.products
            .values()
            .filter(move |product| product.category() == category)
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> ProductSource<'a> for Catalog<'a> {
    fn product(&self, id: ProductId) -> Option<&Product<'a>> {
        self.products.get(&id)
    }
}

/// Parse a price string (e.g., "2.99 GBP") into minor units and currency.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = iso::find(currency_code)
        .ok_or_else(|| CatalogError::UnknownCurrency((*currency_code).to_string()))?;

    Ok((minor_units, currency))
}
