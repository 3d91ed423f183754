//! Problem formulation for temperature inversion.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::{thermo::capability::ThermoProperties, units::MolarEnthalpy};

use super::EnthalpyBasis;

/// Enthalpy evaluated at a trial temperature.
#[derive(Debug, Clone, Copy)]
pub(super) struct EnthalpyAt {
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) enthalpy: MolarEnthalpy,
}

/// Model adapter exposing temperature as the sole input at fixed pressure.
pub(super) struct EnthalpyModel<'a, T> {
    thermo: &'a T,
    pressure: Pressure,
    basis: EnthalpyBasis,
}

impl<'a, T: ThermoProperties> EnthalpyModel<'a, T> {
    pub(super) fn new(thermo: &'a T, pressure: Pressure, basis: EnthalpyBasis) -> Self {
        Self {
            thermo,
            pressure,
            basis,
        }
    }

    pub(super) fn enthalpy(&self, temperature: ThermodynamicTemperature) -> MolarEnthalpy {
        match self.basis {
            EnthalpyBasis::Absolute => self.thermo.ha(self.pressure, temperature),
            EnthalpyBasis::Sensible => self.thermo.hs(self.pressure, temperature),
        }
    }
}

impl<T: ThermoProperties> Model for EnthalpyModel<'_, T> {
    type Input = ThermodynamicTemperature;
    type Output = EnthalpyAt;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(EnthalpyAt {
            temperature: *input,
            enthalpy: self.enthalpy(*input),
        })
    }
}

/// Equation problem definition for temperature inversion.
///
/// Computes the residual as `enthalpy - target`.
pub(super) struct EnthalpyProblem {
    target: MolarEnthalpy,
}

impl EnthalpyProblem {
    pub(super) fn new(target: MolarEnthalpy) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for EnthalpyProblem {
    type Input = ThermodynamicTemperature;
    type Output = EnthalpyAt;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let h = output.enthalpy.get::<joule_per_mole>();
        let target = self.target.get::<joule_per_mole>();
        Ok([h - target])
    }
}
