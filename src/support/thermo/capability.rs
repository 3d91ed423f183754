//! Capability traits connecting the thermo model to its collaborators.
//!
//! - [`EquationOfState`]: what a thermo model needs from the equation of state
//!   it is layered on (molar mass, validity range, mixing rules).
//! - [`ThermoProperties`]: the property queries a thermo model answers.

mod equation_of_state;
mod properties;

pub use equation_of_state::EquationOfState;
pub use properties::ThermoProperties;
