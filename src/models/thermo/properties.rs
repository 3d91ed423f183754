use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{MassDensity, MolarHeatCapacity, Pressure, Ratio, ThermodynamicTemperature};

use crate::support::{
    thermo::capability::ThermoProperties,
    units::{MolarEnthalpy, MolarEntropy},
};

/// Evaluates molar properties of a thermo model at a given state.
///
/// Out-of-range temperatures are clamped by the wrapped model, so the
/// evaluation never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyModel<T> {
    thermo: T,
}

/// State at which [`PropertyModel`] evaluates properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyInput {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

/// Properties returned by [`PropertyModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Properties {
    /// Temperature after clamping into the valid range.
    pub temperature: ThermodynamicTemperature,
    pub cp: MolarHeatCapacity,
    pub cv: MolarHeatCapacity,
    pub gamma: Ratio,
    /// Absolute enthalpy, `hs + hc`.
    pub ha: MolarEnthalpy,
    /// Sensible enthalpy.
    pub hs: MolarEnthalpy,
    /// Chemical enthalpy.
    pub hc: MolarEnthalpy,
    pub s: MolarEntropy,
    /// Gibbs free energy.
    pub g: MolarEnthalpy,
    pub density: MassDensity,
}

impl<T: ThermoProperties> PropertyModel<T> {
    #[must_use]
    pub fn new(thermo: T) -> Self {
        Self { thermo }
    }

    /// Returns the wrapped thermo model.
    #[must_use]
    pub fn thermo(&self) -> &T {
        &self.thermo
    }
}

impl<T: ThermoProperties> Model for PropertyModel<T> {
    type Input = PropertyInput;
    type Output = Properties;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let th = &self.thermo;
        let p = input.pressure;
        let t = th.limit(input.temperature);

        Ok(Properties {
            temperature: t,
            cp: th.cp(p, t),
            cv: th.cv(p, t),
            gamma: th.gamma(p, t),
            ha: th.ha(p, t),
            hs: th.hs(p, t),
            hc: th.hc(),
            s: th.s(p, t),
            g: th.g(p, t),
            density: th.density(p, t),
        })
    }
}
