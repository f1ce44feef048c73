//! Till
//!
//! Till is a small in-memory shopping cart and checkout engine: a product
//! catalog, a cart that merges its lines per product, percentage discounts
//! over order totals, and a checkout gate that validates the cart and the
//! shipping details before handing the order to an external processor.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod discounts;
pub mod prelude;
pub mod products;
pub mod shipping;
