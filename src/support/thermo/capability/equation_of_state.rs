use std::{
    fmt::{Debug, Display},
    ops::{Add, Mul, Sub},
};

use serde::{Serialize, de::DeserializeOwned};
use uom::si::f64::{MassDensity, MolarMass, Pressure, ThermodynamicTemperature};

use crate::support::{thermo::ThermoError, tokens::FromTokens, units::MolarEntropy};

/// An equation of state that a thermo model can be layered on.
///
/// Besides the `p-ρ-T` relation, an equation of state carries the amount of
/// substance it represents. Mixtures are formed with the arithmetic operators,
/// which must combine amounts the way the thermo model expects:
///
/// - `a + b` holds `a.moles() + b.moles()`,
/// - `a - b` holds `a.moles() - b.moles()`,
/// - `a * s` holds `s * a.moles()`.
///
/// The thermo model uses the ratio of each operand's amount to the result's
/// amount as its mixing weight.
///
/// Text I/O goes through [`Display`] and [`FromTokens`], writing and reading
/// the same fields in the same order.
pub trait EquationOfState:
    Copy
    + Debug
    + Display
    + FromTokens<Error = ThermoError>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
    /// Name used to build composite thermo type names.
    const TYPE_NAME: &'static str;

    /// Structured configuration for this equation of state.
    type Record: Serialize + DeserializeOwned + Clone + Debug;

    /// Builds the equation of state from its configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::MalformedInput`] if the record holds invalid values.
    fn from_record(record: &Self::Record) -> Result<Self, ThermoError>;

    /// Returns the configuration record describing this equation of state.
    fn to_record(&self) -> Self::Record;

    /// Returns the amount of substance used as the mixing weight.
    fn moles(&self) -> f64;

    /// Returns the molar mass.
    fn molar_mass(&self) -> MolarMass;

    /// Returns the `(low, high)` temperatures bounding valid evaluation.
    fn valid_temperature_range(&self) -> (ThermodynamicTemperature, ThermodynamicTemperature);

    /// Returns the density at the given pressure and temperature.
    fn density(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MassDensity;

    /// Returns the molar difference `cp - cv` at the given pressure and temperature.
    fn cp_minus_cv(&self, pressure: Pressure, temperature: ThermodynamicTemperature)
    -> MolarEntropy;

    /// Merges two definitions that must describe the same substance.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::ShapeMismatch`] if the definitions disagree.
    fn equate(&self, other: &Self) -> Result<Self, ThermoError>;
}
