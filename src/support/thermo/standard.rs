//! Standard reference state.
//!
//! Sensible enthalpy and the entropy correlation are zero at the standard
//! temperature.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::MolarEntropy;

/// Standard temperature in kelvin.
pub const TEMPERATURE_K: f64 = 298.15;

/// Standard pressure in pascal.
pub const PRESSURE_PA: f64 = 1.0e5;

/// Universal gas constant in J/(mol·K).
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314_462_618;

/// Returns the standard temperature, 298.15 K.
#[must_use]
pub fn temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(TEMPERATURE_K)
}

/// Returns the standard pressure, 1 bar.
#[must_use]
pub fn pressure() -> Pressure {
    Pressure::new::<pascal>(PRESSURE_PA)
}

/// Returns the universal gas constant.
#[must_use]
pub fn gas_constant() -> MolarEntropy {
    MolarEntropy::new::<joule_per_kelvin_mole>(GAS_CONSTANT_J_PER_MOL_K)
}
