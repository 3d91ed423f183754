use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Used for quantities that are meaningless at or below zero, such as a molar
/// mass, an amount of substance, or an absolute temperature bound.
///
/// # Examples
///
/// ```
/// use twine_polythermo::support::constraint::StrictlyPositive;
/// use uom::si::{f64::MolarMass, molar_mass::gram_per_mole};
///
/// let w = StrictlyPositive::new(MolarMass::new::<gram_per_mole>(44.01)).unwrap();
/// assert_eq!(w.into_inner().get::<gram_per_mole>(), 44.01);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

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

    use uom::si::{
        f64::{MolarMass, ThermodynamicTemperature},
        molar_mass::gram_per_mole,
        thermodynamic_temperature::kelvin,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn molar_masses() {
        let w = MolarMass::new::<gram_per_mole>(28.0134);
        assert!(StrictlyPositive::new(w).is_ok());

        let w = MolarMass::new::<gram_per_mole>(0.0);
        assert!(StrictlyPositive::new(w).is_err());
    }

    #[test]
    fn temperatures() {
        let t = ThermodynamicTemperature::new::<kelvin>(200.0);
        assert!(StrictlyPositive::new(t.get::<kelvin>()).is_ok());

        let t = ThermodynamicTemperature::new::<kelvin>(0.0);
        assert!(StrictlyPositive::new(t.get::<kelvin>()).is_err());
    }
}
