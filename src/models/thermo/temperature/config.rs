use twine_solvers::equation::bisection;
use uom::si::{
    f64::TemperatureInterval, molar_energy::joule_per_mole,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::MolarEnthalpy;

/// Solver configuration for temperature inversion.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureSolveConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the enthalpy residual (achieved - target).
    pub enthalpy_tol: MolarEnthalpy,
}

impl Default for TemperatureSolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-10),
            enthalpy_tol: MolarEnthalpy::new::<joule_per_mole>(1e-9),
        }
    }
}

impl TemperatureSolveConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.enthalpy_tol.get::<joule_per_mole>(),
        }
    }
}
