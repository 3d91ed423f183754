use uom::si::f64::{
    MassDensity, MolarHeatCapacity, Pressure, Ratio, ThermodynamicTemperature,
};

use crate::support::units::{MolarEnthalpy, MolarEntropy, MolarInternalEnergy};

/// Molar thermodynamic properties as functions of pressure and temperature.
///
/// Implementors clamp temperatures into [`valid_temperature_range`] with
/// [`limit`] before evaluating anything, so every method is total.
///
/// [`valid_temperature_range`]: ThermoProperties::valid_temperature_range
/// [`limit`]: ThermoProperties::limit
pub trait ThermoProperties {
    /// Returns the `(low, high)` temperatures bounding valid evaluation.
    fn valid_temperature_range(&self) -> (ThermodynamicTemperature, ThermodynamicTemperature);

    /// Returns `temperature` clamped into the valid range.
    fn limit(&self, temperature: ThermodynamicTemperature) -> ThermodynamicTemperature;

    /// Returns the molar heat capacity at constant pressure.
    fn cp(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarHeatCapacity;

    /// Returns the molar heat capacity at constant volume.
    fn cv(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarHeatCapacity;

    /// Returns the sensible enthalpy, zero at the standard temperature.
    fn hs(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarEnthalpy;

    /// Returns the chemical enthalpy (heat of formation).
    fn hc(&self) -> MolarEnthalpy;

    /// Returns the sensible internal energy.
    fn es(&self, pressure: Pressure, temperature: ThermodynamicTemperature)
    -> MolarInternalEnergy;

    /// Returns the absolute entropy.
    fn s(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarEntropy;

    /// Returns the density.
    fn density(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MassDensity;

    /// Returns the absolute enthalpy, `hs + hc`.
    fn ha(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarEnthalpy {
        self.hs(pressure, temperature) + self.hc()
    }

    /// Returns the absolute internal energy, `es + hc`.
    fn ea(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarInternalEnergy {
        self.es(pressure, temperature) + self.hc()
    }

    /// Returns the heat capacity ratio `cp / cv`.
    fn gamma(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> Ratio {
        self.cp(pressure, temperature) / self.cv(pressure, temperature)
    }

    /// Returns the Gibbs free energy `ha - T·s`, with `T` limited.
    fn g(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarEnthalpy {
        let t = self.limit(temperature);
        self.ha(pressure, t) - self.s(pressure, t) * t
    }

    /// Returns the Helmholtz free energy `ea - T·s`, with `T` limited.
    fn a(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarInternalEnergy {
        let t = self.limit(temperature);
        self.ea(pressure, t) - self.s(pressure, t) * t
    }
}
