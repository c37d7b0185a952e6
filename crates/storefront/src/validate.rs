//! Contract conformance checks
//!
//! Serde already enforces field presence and enum membership when a payload
//! is decoded. [`Validate`] covers the rules a JSON shape cannot express:
//! value ranges, non-negative money, and aggregates that must agree with
//! the items they summarise.

use rust_decimal::Decimal;
use thiserror::Error;

/// A decoded payload that breaks a contract rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{resource}.{field}: {reason}")]
pub struct ContractError {
    pub resource: &'static str,
    pub field: &'static str,
    pub reason: String,
}

impl ContractError {
    pub fn new(resource: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            resource,
            field,
            reason: reason.into(),
        }
    }
}

/// Value-level rules checked after a payload is decoded
pub trait Validate {
    fn validate(&self) -> Result<(), ContractError> {
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ContractError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ContractError> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

impl Validate for () {}

/// Reject negative monetary amounts
pub fn non_negative(
    resource: &'static str,
    field: &'static str,
    value: Decimal,
) -> Result<(), ContractError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ContractError::new(
            resource,
            field,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

/// Reject a percentage outside 0..=100
pub fn percentage(
    resource: &'static str,
    field: &'static str,
    value: Decimal,
) -> Result<(), ContractError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ContractError::new(
            resource,
            field,
            format!("must be within 0..=100, got {value}"),
        ));
    }
    Ok(())
}

/// Reject a star rating outside 1..=5
pub fn rating(resource: &'static str, value: u8) -> Result<(), ContractError> {
    if !(1..=5).contains(&value) {
        return Err(ContractError::new(
            resource,
            "rating",
            format!("must be within 1..=5, got {value}"),
        ));
    }
    Ok(())
}
