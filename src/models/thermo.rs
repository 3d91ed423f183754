//! Thermodynamic property models.
//!
//! - [`PropertyModel`]: evaluates a full property set at `(p, T)`.
//! - [`TemperatureModel`]: recovers `T` from `(p, h)` by bisection.

mod properties;
mod temperature;

pub use properties::{Properties, PropertyInput, PropertyModel};
pub use temperature::{
    EnthalpyBasis, EnthalpyInput, TemperatureModel, TemperatureSolveConfig,
    TemperatureSolveError, temperature_from_enthalpy,
};
