//! Numeric constraints checked at the edges of the blending computations.
//!
//! Blending inputs carry simple invariants: fractions live in `[0, 1]`,
//! vessel volumes and absolute temperatures are strictly positive, and molar
//! amounts and pressures never go negative. This module expresses those
//! invariants as zero-sized marker types so each one is checked in one place.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//!
//! ```
//! use blndr::support::constraint::{Constraint, ConstraintError, NonNegative};
//! use blndr::support::units::bar;
//!
//! assert!(NonNegative::check(&bar(200.0)).is_ok());
//! assert_eq!(NonNegative::check(&bar(-1.0)), Err(ConstraintError::Negative));
//! ```

mod non_negative;
mod strictly_positive;
mod unit_interval;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitInterval;

/// A trait for enforcing numeric invariants.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}
