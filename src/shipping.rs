//! Shipping Details

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Validation errors for shipping details.
#[derive(Debug, Error, PartialEq)]
pub enum ShippingDetailsError {
    /// One or more required fields were blank.
    #[error("Missing required shipping fields: {}", .0.join(", "))]
    MissingFields(SmallVec<[&'static str; 6]>),
}

/// Delivery details supplied at checkout time.
///
/// A plain record: nothing here is persisted by the cart or the checkout
/// gate. Optional fields may be left empty; [`ShippingDetails::validate`]
/// checks the required ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingDetails {
    /// Recipient name
    pub name: String,

    /// First address line
    pub line1: String,

    /// Second address line
    pub line2: Option<String>,

    /// Third address line
    pub line3: Option<String>,

    /// City
    pub city: String,

    /// State or county
    pub state: String,

    /// Postal or zip code
    pub zip: Option<String>,

    /// Country
    pub country: String,

    /// Whether the order should be gift wrapped
    pub gift_wrap: bool,
}

impl ShippingDetails {
    /// Check that every required field is present.
    ///
    /// Blank and whitespace-only values count as missing. All missing fields
    /// are reported together so a caller can annotate a whole form at once.
    ///
    /// # Errors
    ///
    /// Returns a [`ShippingDetailsError::MissingFields`] naming every blank
    /// required field.
    pub fn validate(&self) -> Result<(), ShippingDetailsError> {
        let required = [
            ("name", &self.name),
            ("line1", &self.line1),
            ("city", &self.city),
            ("state", &self.state),
            ("country", &self.country),
        ];

        let missing: SmallVec<[&'static str; 6]> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ShippingDetailsError::MissingFields(missing))
        }
    }
}
