//! A small validator that lets checks on a value be chained with `?`.
//!
//! # Examples
//! ```
//! # use anenome::validate::{ValidationError, Validator};
//! fn port(raw: Option<u32>) -> Result<u32, ValidationError> {
//!     let port = Validator::validate(raw)
//!         .is_some()?
//!         .test(|p| p.is_some_and(|p| (1..=65535).contains(&p)))?
//!         .complete();
//!     Ok(port.unwrap_or_default())
//! }
//!
//! assert_eq!(port(Some(8080)).unwrap(), 8080);
//! assert!(port(Some(0)).is_err());
//! assert!(port(None).is_err());
//! ```

mod tests;

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("value can not be none")]
pub struct NoneValueError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("value must be none")]
pub struct SomeValueError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("validation predicate returned false")]
pub struct PredicateError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ValidationError {
    NoneValue(NoneValueError),
    SomeValue(SomeValueError),
    PredicateFailed(PredicateError),
}

/// Holds a value while it is checked. Each check consumes the validator and hands it back on
/// success, so a failed check ends the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator<T> {
    value: T,
}

impl<T> Validator<T> {
    /// Starts validating `value`.
    pub const fn validate(value: T) -> Validator<T> {
        Validator { value }
    }

    /// Checks the value against `predicate`.
    ///
    /// # Errors
    /// Returns [`ValidationError::PredicateFailed`] if `predicate` returns false.
    pub fn test<F: FnOnce(&T) -> bool>(self, predicate: F) -> Result<Self, ValidationError> {
        if !predicate(&self.value) {
            Err(PredicateError)?
        }

        Ok(self)
    }

    /// Ends the chain, returning the value untouched.
    pub fn complete(self) -> T {
        self.value
    }
}

impl<T> Validator<Option<T>> {
    /// # Errors
    /// Returns [`ValidationError::NoneValue`] if the value is [`None`].
    pub fn is_some(self) -> Result<Self, ValidationError> {
        if self.value.is_none() {
            Err(NoneValueError)?
        }

        Ok(self)
    }

    /// # Errors
    /// Returns [`ValidationError::SomeValue`] if the value is [`Some`].
    pub fn is_none(self) -> Result<Self, ValidationError> {
        if self.value.is_some() {
            Err(SomeValueError)?
        }

        Ok(self)
    }
}
