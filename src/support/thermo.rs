//! Polynomial thermodynamics layered on an equation of state.
//!
//! The thermo model [`HPolynomial`] owns an equation of state (any type
//! implementing [`capability::EquationOfState`]) and a fixed-size polynomial
//! fit of `cp(T)`, and answers property queries through
//! [`capability::ThermoProperties`].

mod error;

pub mod capability;
pub mod eos;
pub mod mixture;
pub mod model;
pub mod record;
pub mod standard;

pub use error::ThermoError;
pub use model::{HPolynomial, TemperatureLimit};
