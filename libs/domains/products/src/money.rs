//! Money value object

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};

/// Supported currency. The catalog prices everything in Brazilian reais.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Brl,
}

/// A price: an amount tagged with its currency.
///
/// Construction and validation are separate steps. [`Money::create`] accepts any
/// amount, including values read from an untrusted boundary; [`Money::validate`]
/// is called on the write path before anything is persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    value: f64,
    currency: Currency,
}

impl Money {
    /// Wrap `value` in the default currency. Never fails.
    ///
    /// Non-numeric transport input arrives here as `NaN`.
    pub fn create(value: f64) -> Self {
        Self {
            value,
            currency: Currency::default(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Check that the amount is a finite number strictly greater than zero.
    pub fn validate(&self) -> ProductResult<()> {
        if self.value.is_nan() {
            return Err(ProductError::Validation(
                "Price must be a number".to_string(),
            ));
        }
        if !self.value.is_finite() {
            return Err(ProductError::Validation(
                "Price must be a finite number".to_string(),
            ));
        }
        if self.value <= 0.0 {
            return Err(ProductError::Validation(
                "Price must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_wraps_value_in_brl() {
        let money = Money::create(100.0);
        assert_eq!(money.value(), 100.0);
        assert_eq!(money.currency(), Currency::Brl);
        assert_eq!(money.currency().to_string(), "BRL");
    }

    #[test]
    fn test_create_does_not_validate() {
        let money = Money::create(-5.0);
        assert_eq!(money.value(), -5.0);
    }

    #[test]
    fn test_positive_finite_amounts_are_valid() {
        for value in [0.01, 1.0, 19.9, 100.0, 1e9, f64::MIN_POSITIVE] {
            assert!(Money::create(value).validate().is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn test_nan_is_rejected() {
        let err = Money::create(f64::NAN).validate().unwrap_err();
        assert!(matches!(err, ProductError::Validation(ref msg) if msg == "Price must be a number"));
    }

    #[test]
    fn test_zero_and_negative_are_rejected() {
        for value in [0.0, -0.0, -1.0, -0.01] {
            let err = Money::create(value).validate().unwrap_err();
            assert!(
                matches!(err, ProductError::Validation(_)),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_infinities_are_rejected() {
        assert!(Money::create(f64::INFINITY).validate().is_err());
        assert!(Money::create(f64::NEG_INFINITY).validate().is_err());
    }
}
