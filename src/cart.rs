//! Cart

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    catalog::ProductSource,
    products::{Product, ProductId},
};

/// Errors related to cart mutation or totals.
#[derive(Debug, Error)]
pub enum CartError {
    /// A product's currency differs from the cart currency (product id, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// A line subtotal exceeded the representable minor-unit range.
    #[error("Subtotal for product {0} overflowed minor units")]
    SubtotalOverflow(ProductId),

    /// No product with the given identifier in the product source.
    #[error("Product {0} not found")]
    UnknownProduct(ProductId),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// One (product, quantity) entry within a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// Get the product for this line.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Get the quantity for this line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Calculate the line subtotal (unit price times quantity).
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::SubtotalOverflow`] if the subtotal cannot be
    /// represented in minor units.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, CartError> {
        let minor = self
            .product
            .price()
            .to_minor_units()
            .checked_mul(i64::from(self.quantity))
            .ok_or(CartError::SubtotalOverflow(self.product.id()))?;

        Ok(Money::from_minor(minor, self.product.price().currency()))
    }
}

/// Cart
///
/// An ordered collection of [`CartLine`] keyed by product identity: at most
/// one line per distinct product. A cart is an owned value with a single
/// logical owner; it is created per session, mutated in place and dropped or
/// cleared when the session ends.
#[derive(Debug)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new empty cart in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If a line for the product already exists its quantity is incremented
    /// in place; otherwise a new line is appended. A zero quantity is
    /// accepted and behaves like any other increment. Accumulation saturates
    /// at `u32::MAX` rather than wrapping.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::CurrencyMismatch`] if the product's currency
    /// differs from the cart currency.
    pub fn add_item(&mut self, product: Product<'a>, quantity: u32) -> Result<(), CartError> {
        let product_currency = product.price().currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id(),
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id() == product.id())
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }

        Ok(())
    }

    /// Remove the line matching the given product identifier, if present.
    pub fn remove_line(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id() != id);
    }

    /// Get the current lines in insertion order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Calculate the total of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if a line subtotal overflows or money
    /// arithmetic fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, CartError> {
        self.lines
            .iter()
            .try_fold(Money::from_minor(0, self.currency), |acc, line| {
                Ok(acc.add(line.subtotal()?)?)
            })
    }

    /// Remove all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Resolve a product from `source` and add `quantity` units of it to the cart.
///
/// # Errors
///
/// - [`CartError::UnknownProduct`]: no product with that identifier in the source.
/// - [`CartError::CurrencyMismatch`]: the product's currency differs from the cart currency.
pub fn add_to_cart<'a, S>(
    cart: &mut Cart<'a>,
    source: &S,
    id: ProductId,
    quantity: u32,
) -> Result<(), CartError>
where
    S: ProductSource<'a> + ?Sized,
{
    let product = source
        .product(id)
        .ok_or(CartError::UnknownProduct(id))?
        .clone();

    cart.add_item(product, quantity)
}
