use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than zero.
///
/// Vessel volumes and absolute temperatures must satisfy this before an
/// equation of state can divide by them.
///
/// ```
/// use blndr::support::constraint::{Constraint, StrictlyPositive};
///
/// assert!(StrictlyPositive::check(&10.0).is_ok());
/// assert!(StrictlyPositive::check(&0.0).is_err());
/// assert!(StrictlyPositive::check(&-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Volume, volume::liter};

    #[test]
    fn floats() {
        assert_eq!(StrictlyPositive::check(&293.15), Ok(()));
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::check(&-273.15),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn volumes() {
        assert!(StrictlyPositive::check(&Volume::new::<liter>(14.0)).is_ok());
        assert_eq!(
            StrictlyPositive::check(&Volume::new::<liter>(0.0)),
            Err(ConstraintError::Zero)
        );
    }
}
