//! Building mixture thermo data from species data.
//!
//! A mixture is the sum of its species scaled by their fractions,
//! `Σ xᵢ·thermoᵢ`, formed with the same operators used to combine any two
//! thermo models. The result's amount is the fraction-weighted amount of its
//! parts, and its `cp` fit and reference values are amount-weighted means.

use crate::support::constraint::{Constrained, NonNegative};

use super::{ThermoError, capability::EquationOfState, model::HPolynomial};

/// Blends species thermo data into mixture thermo data.
///
/// Each component is `(fraction, thermo)`. Fractions need not sum to one; a
/// zero fraction leaves its species out.
///
/// # Errors
///
/// Returns [`ThermoError::MalformedInput`] if a fraction is negative or not
/// finite, if `components` is empty, or if all fractions are zero.
///
/// # Example
///
/// ```
/// use twine_polythermo::support::{
///     polynomial::Polynomial,
///     thermo::{HPolynomial, capability::EquationOfState, eos::IdealGas, mixture},
///     units::{SpecificEnthalpy, SpecificEntropy},
/// };
/// use uom::si::{
///     available_energy::joule_per_kilogram,
///     f64::{MolarMass, ThermodynamicTemperature},
///     molar_mass::gram_per_mole,
///     specific_heat_capacity::joule_per_kilogram_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let species = |w: f64, cp: [f64; 2]| {
///     let eos = IdealGas::new(
///         MolarMass::new::<gram_per_mole>(w),
///         ThermodynamicTemperature::new::<kelvin>(200.0),
///         ThermodynamicTemperature::new::<kelvin>(3000.0),
///     )
///     .unwrap();
///     HPolynomial::new(
///         eos,
///         SpecificEnthalpy::new::<joule_per_kilogram>(0.0),
///         SpecificEntropy::new::<joule_per_kilogram_kelvin>(0.0),
///         Polynomial::new(cp),
///     )
/// };
///
/// let air = mixture::blend(&[
///     (0.79, species(28.0134, [1000.0, 0.2])),
///     (0.21, species(31.9988, [900.0, 0.3])),
/// ])
/// .unwrap();
///
/// let w = air.equation_of_state().molar_mass().get::<gram_per_mole>();
/// assert!((w - 28.85).abs() < 0.01);
/// ```
pub fn blend<E, const N: usize>(
    components: &[(f64, HPolynomial<E, N>)],
) -> Result<HPolynomial<E, N>, ThermoError>
where
    E: EquationOfState,
{
    let fractions = components
        .iter()
        .enumerate()
        .map(|(i, (fraction, _))| {
            if fraction.is_infinite() {
                return Err(ThermoError::malformed(format!("fraction {i} must be finite")));
            }
            NonNegative::new(*fraction)
                .map_err(|error| ThermoError::invalid(&format!("fraction {i}"), error))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total: Constrained<f64, NonNegative> = fractions.iter().copied().sum();
    if total.into_inner() == 0.0 {
        return Err(ThermoError::malformed(
            "mixture needs at least one component with a positive fraction",
        ));
    }

    let mut present = fractions
        .iter()
        .zip(components)
        .map(|(fraction, (_, thermo))| (fraction.into_inner(), thermo))
        .filter(|(fraction, _)| *fraction > 0.0);

    let Some((first_fraction, first)) = present.next() else {
        return Err(ThermoError::malformed("mixture has no components"));
    };

    Ok(present.fold(*first * first_fraction, |mut mix, (fraction, thermo)| {
        mix += *thermo * fraction;
        mix
    }))
}
