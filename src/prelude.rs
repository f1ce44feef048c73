//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, add_to_cart},
    catalog::{Catalog, CatalogError, ProductSource},
    checkout::{CheckoutError, OrderProcessor, checkout},
    discounts::{DiscountError, PercentageDiscount},
    products::{Product, ProductError, ProductId},
    shipping::{ShippingDetails, ShippingDetailsError},
};
