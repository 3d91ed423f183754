//! Thermo models.

pub mod h_polynomial;

pub use h_polynomial::{HPolynomial, TemperatureLimit};
