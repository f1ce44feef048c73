//! Discounts

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A percentage taken off an order total (e.g. 10% off).
#[derive(Debug, Copy, Clone)]
pub struct PercentageDiscount {
    rate: Percentage,
}

impl PercentageDiscount {
    /// Create a discount from a fractional rate (0.10 for 10% off).
    pub fn new(rate: Percentage) -> Self {
        PercentageDiscount { rate }
    }

    /// Create a discount from percent points (10.0 for 10% off).
    pub fn from_points(points: f64) -> Self {
        PercentageDiscount {
            rate: Percentage::from(points / 100.0),
        }
    }

    /// Apply the discount to a total, returning the reduced amount.
    ///
    /// The discount amount is computed in minor units and rounded midpoint
    /// away from zero, so 10% off 1.05 comes out at 0.94, not 0.95.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::PercentConversion`]: the percentage calculation
    ///   overflowed or could not be safely represented.
    /// - [`DiscountError::Money`]: the money subtraction failed.
    pub fn apply<'a>(
        &self,
        total: Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        let off = percent_of_minor(&self.rate, total.to_minor_units())?;

        Ok(total.sub(Money::from_minor(off, total.currency()))?)
    }
}

/// Calculate the discount amount in minor units based on a percentage and a
/// minor unit amount.
fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage crate doesn't actually expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}
