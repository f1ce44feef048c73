//! Checkout
//!
//! The gate between a cart and the external order processor: two validation
//! guards, then a single forward of the (cart, shipping details) pair.

use thiserror::Error;

use crate::{
    cart::Cart,
    shipping::{ShippingDetails, ShippingDetailsError},
};

/// External collaborator that finalises a submitted order.
///
/// The checkout gate treats the processor as a black box: it forwards the
/// order at most once per attempt and never inspects a failure beyond
/// passing it through.
pub trait OrderProcessor<'a> {
    /// Error surfaced when the order cannot be completed.
    type Error: std::error::Error;

    /// Submit the order for processing.
    ///
    /// # Errors
    ///
    /// Implementation-defined; any failure aborts the checkout attempt.
    fn process(&mut self, cart: &Cart<'a>, details: &ShippingDetails) -> Result<(), Self::Error>;
}

/// Reasons a checkout attempt was rejected or failed downstream.
#[derive(Debug, Error)]
pub enum CheckoutError<E: std::error::Error> {
    /// The cart had no lines.
    #[error("Sorry, your cart is empty!")]
    EmptyCart,

    /// The shipping details failed validation.
    #[error(transparent)]
    InvalidShippingDetails(#[from] ShippingDetailsError),

    /// The order processor reported a failure; passed through untranslated.
    #[error(transparent)]
    Processor(E),
}

/// Gate a checkout attempt, forwarding to the processor when it may proceed.
///
/// An empty cart or invalid shipping details reject the attempt before the
/// processor is ever invoked. Otherwise the (cart, details) pair is handed
/// to the processor exactly once; on success the cart is cleared, on failure
/// it is left intact so the attempt can be retried by the caller.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`]: the cart has no lines.
/// - [`CheckoutError::InvalidShippingDetails`]: a required shipping field is blank.
/// - [`CheckoutError::Processor`]: the processor failed; the error is passed through.
pub fn checkout<'a, P>(
    cart: &mut Cart<'a>,
    details: &ShippingDetails,
    processor: &mut P,
) -> Result<(), CheckoutError<P::Error>>
where
    P: OrderProcessor<'a>,
{
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    details.validate()?;

    processor
        .process(cart, details)
        .map_err(CheckoutError::Processor)?;

    cart.clear();

    Ok(())
}
