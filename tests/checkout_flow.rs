//! Integration tests for the checkout gate.
//!
//! Mirrors the storefront flow end to end: resolve products from a catalog,
//! accumulate them in a cart, and submit the order through the two checkout
//! guards to a recording order processor.

use rusty_money::{Money, iso};
use testresult::TestResult;
use thiserror::Error;

use till::prelude::*;

#[derive(Debug, Error)]
#[error("order processing failed")]
struct ProcessorFailure;

/// Order processor double that records every invocation.
#[derive(Debug, Default)]
struct RecordingProcessor {
    calls: usize,
    fail: bool,
}

impl<'a> OrderProcessor<'a> for RecordingProcessor {
    type Error = ProcessorFailure;

    fn process(
        &mut self,
        _cart: &Cart<'a>,
        _details: &ShippingDetails,
    ) -> Result<(), ProcessorFailure> {
        self.calls += 1;

        if self.fail { Err(ProcessorFailure) } else { Ok(()) }
    }
}

fn valid_details() -> ShippingDetails {
    ShippingDetails {
        name: "Joe Bloggs".to_string(),
        line1: "1 High Street".to_string(),
        city: "London".to_string(),
        state: "Greater London".to_string(),
        country: "UK".to_string(),
        ..ShippingDetails::default()
    }
}

fn kayak() -> Result<Product<'static>, ProductError> {
    Product::new(
        ProductId(1),
        "Kayak",
        "Watersports",
        Money::from_minor(27500, iso::GBP),
    )
}

#[test]
fn cannot_checkout_empty_cart() -> TestResult {
    let mut cart = Cart::new(iso::GBP);
    let mut processor = RecordingProcessor::default();

    let result = checkout(&mut cart, &valid_details(), &mut processor);

    assert!(
        matches!(result, Err(CheckoutError::EmptyCart)),
        "expected EmptyCart, got {result:?}"
    );
    assert_eq!(processor.calls, 0, "processor must not be invoked");

    Ok(())
}

#[test]
fn cannot_checkout_invalid_shipping_details() -> TestResult {
    let mut cart = Cart::new(iso::GBP);
    cart.add_item(kayak()?, 1)?;

    let mut processor = RecordingProcessor::default();

    let result = checkout(&mut cart, &ShippingDetails::default(), &mut processor);

    assert!(
        matches!(result, Err(CheckoutError::InvalidShippingDetails(_))),
        "expected InvalidShippingDetails, got {result:?}"
    );
    assert_eq!(processor.calls, 0, "processor must not be invoked");
    assert_eq!(cart.len(), 1, "cart must be left intact");

    Ok(())
}

#[test]
fn can_checkout_and_submit_order() -> TestResult {
    let mut cart = Cart::new(iso::GBP);
    cart.add_item(kayak()?, 1)?;

    let mut processor = RecordingProcessor::default();

    checkout(&mut cart, &valid_details(), &mut processor)
        .map_err(|error| anyhow::anyhow!("checkout failed: {error}"))?;

    assert_eq!(processor.calls, 1, "processor must be invoked exactly once");
    assert!(cart.is_empty(), "cart must be cleared after a submitted order");

    Ok(())
}

#[test]
fn processor_failure_passes_through_and_keeps_cart() -> TestResult {
    let mut cart = Cart::new(iso::GBP);
    cart.add_item(kayak()?, 2)?;

    let mut processor = RecordingProcessor {
        fail: true,
        ..RecordingProcessor::default()
    };

    let result = checkout(&mut cart, &valid_details(), &mut processor);

    assert!(
        matches!(result, Err(CheckoutError::Processor(ProcessorFailure))),
        "expected the processor error untranslated, got {result:?}"
    );
    assert_eq!(processor.calls, 1, "processor must be invoked exactly once");
    assert_eq!(cart.len(), 1, "cart must survive a failed submission");

    Ok(())
}

#[test]
fn storefront_flow_from_catalog_to_order() -> TestResult {
    let catalog = Catalog::from_yaml_str(
        "
products:
  - id: 1
    name: Kayak
    category: Watersports
    price: 275.00 GBP
  - id: 2
    name: Lifejacket
    category: Watersports
    price: 48.95 GBP
",
    )?;

    let mut cart = Cart::new(iso::GBP);

    add_to_cart(&mut cart, &catalog, ProductId(1), 1)?;
    add_to_cart(&mut cart, &catalog, ProductId(2), 2)?;
    add_to_cart(&mut cart, &catalog, ProductId(1), 1)?;

    // Two distinct products, so two lines; the kayak line merged to qty 2.
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total()?, Money::from_minor(64790, iso::GBP));

    // 10% off the order total before submitting.
    let discounted = PercentageDiscount::from_points(10.0).apply(cart.total()?)?;
    assert_eq!(discounted, Money::from_minor(58311, iso::GBP));

    let mut processor = RecordingProcessor::default();

    checkout(&mut cart, &valid_details(), &mut processor)
        .map_err(|error| anyhow::anyhow!("checkout failed: {error}"))?;

    assert_eq!(processor.calls, 1, "processor must be invoked exactly once");
    assert!(cart.is_empty(), "cart must be cleared after a submitted order");

    Ok(())
}
