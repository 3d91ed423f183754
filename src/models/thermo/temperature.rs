//! Iterative temperature inversion.
//!
//! Thermo models give enthalpy as an explicit function of temperature. This
//! module recovers the temperature for a target enthalpy by bisection over
//! the model's valid temperature range.

mod config;
mod error;
mod problem;

pub use config::TemperatureSolveConfig;
pub use error::TemperatureSolveError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::{thermo::capability::ThermoProperties, units::MolarEnthalpy};

use problem::{EnthalpyModel, EnthalpyProblem};

/// Which enthalpy a target value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnthalpyBasis {
    /// Absolute enthalpy, `hs + hc`.
    #[default]
    Absolute,
    /// Sensible enthalpy, zero at the standard temperature.
    Sensible,
}

/// Finds the temperature at which `thermo` has the target enthalpy.
///
/// The search is bracketed by the model's valid temperature range.
///
/// # Errors
///
/// Returns [`TemperatureSolveError`] if the target lies outside the enthalpy
/// span of the valid range or the solver fails to converge.
pub fn temperature_from_enthalpy<T: ThermoProperties>(
    thermo: &T,
    pressure: Pressure,
    enthalpy: MolarEnthalpy,
    basis: EnthalpyBasis,
    config: &TemperatureSolveConfig,
) -> Result<ThermodynamicTemperature, TemperatureSolveError> {
    let model = EnthalpyModel::new(thermo, pressure, basis);
    let (t_low, t_high) = thermo.valid_temperature_range();

    let h_low = model.enthalpy(t_low);
    let h_high = model.enthalpy(t_high);
    let (min, max) = if h_low <= h_high {
        (h_low, h_high)
    } else {
        (h_high, h_low)
    };
    if !(enthalpy >= min && enthalpy <= max) {
        return Err(TemperatureSolveError::OutOfRange {
            target: enthalpy,
            min,
            max,
        });
    }

    let problem = EnthalpyProblem::new(enthalpy);

    let solution = bisection::solve(
        &model,
        &problem,
        [t_low.get::<kelvin>(), t_high.get::<kelvin>()],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(TemperatureSolveError::MaxIters {
            residual: MolarEnthalpy::new::<joule_per_mole>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.temperature)
}

/// Recovers temperature from pressure and enthalpy for a thermo model.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureModel<T> {
    thermo: T,
    basis: EnthalpyBasis,
    config: TemperatureSolveConfig,
}

/// State from which [`TemperatureModel`] recovers temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyInput {
    pub pressure: Pressure,
    pub enthalpy: MolarEnthalpy,
}

impl<T: ThermoProperties> TemperatureModel<T> {
    /// Creates a model that inverts enthalpy of the given basis.
    #[must_use]
    pub fn new(thermo: T, basis: EnthalpyBasis) -> Self {
        Self {
            thermo,
            basis,
            config: TemperatureSolveConfig::default(),
        }
    }

    /// Returns this model with the given solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: TemperatureSolveConfig) -> Self {
        self.config = config;
        self
    }
}

impl<T: ThermoProperties> Model for TemperatureModel<T> {
    type Input = EnthalpyInput;
    type Output = ThermodynamicTemperature;
    type Error = TemperatureSolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        temperature_from_enthalpy(
            &self.thermo,
            input.pressure,
            input.enthalpy,
            self.basis,
            &self.config,
        )
    }
}
