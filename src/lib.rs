//! # Twine Polythermo
//!
//! Polynomial heat capacity thermodynamics for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A species is described by an equation of state plus a fixed-size polynomial
//! fit of `cp(T)`. Enthalpy and entropy are the analytic integrals of that fit,
//! and per-species data can be blended into mixture data with ordinary
//! arithmetic operators.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters over the thermo core.
//! - [`support`]: The thermo core and the utilities it is built from.
//!
//! ## Example
//!
//! ```
//! use twine_polythermo::support::{
//!     polynomial::Polynomial,
//!     thermo::{HPolynomial, capability::ThermoProperties, eos::IdealGas},
//!     units::{SpecificEnthalpy, SpecificEntropy},
//! };
//! use uom::si::{
//!     available_energy::joule_per_kilogram,
//!     f64::{MolarMass, Pressure, ThermodynamicTemperature},
//!     molar_mass::gram_per_mole,
//!     pressure::bar,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let eos = IdealGas::new(
//!     MolarMass::new::<gram_per_mole>(28.0134),
//!     ThermodynamicTemperature::new::<kelvin>(200.0),
//!     ThermodynamicTemperature::new::<kelvin>(3000.0),
//! )
//! .unwrap();
//!
//! let nitrogen: HPolynomial<IdealGas, 2> = HPolynomial::new(
//!     eos,
//!     SpecificEnthalpy::new::<joule_per_kilogram>(0.0),
//!     SpecificEntropy::new::<joule_per_kilogram_kelvin>(6840.0),
//!     Polynomial::new([1000.0, 0.2]),
//! );
//!
//! let p = Pressure::new::<bar>(1.0);
//! let cold = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let hot = ThermodynamicTemperature::new::<kelvin>(500.0);
//! assert!(nitrogen.ha(p, hot) > nitrogen.ha(p, cold));
//! ```

pub mod models;
pub mod support;
