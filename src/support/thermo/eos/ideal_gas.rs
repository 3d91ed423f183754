//! Ideal gas equation of state.
//!
//! `IdealGas` relates pressure, density and temperature with `p = ρ·(R/W)·T`,
//! where `R` is the universal gas constant and `W` the molar mass. It also
//! carries the amount of substance it stands for and the temperature range in
//! which the thermo fit layered on it is valid.
//!
//! # Mixing
//!
//! Instances combine like amounts of substance:
//!
//! - `a + b`: amounts add, the molar mass is the mole-weighted mean, and the
//!   valid range is the intersection of both ranges.
//! - `a - b`: amounts subtract and the molar mass is recovered from the total
//!   masses. The receiver's range is kept.
//! - `a * s`: the amount is scaled.
//!
//! Sums and differences floor a vanishing amount or mass at `SMALL`, so every
//! combination of finite operands stays finite. Combinations can carry a
//! negative amount or molar mass, or an empty range. [`IdealGas::new`] rejects
//! those, but the record and text readers accept them so that anything written
//! reads back.

use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{MassDensity, MolarMass, Pressure, ThermodynamicTemperature},
    molar_mass::{gram_per_mole, kilogram_per_mole},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{ThermoError, capability::EquationOfState, standard},
    tokens::{FromTokens, next_scalar},
    units::MolarEntropy,
};

/// Floor applied to amount and mass differences so `a - b` never divides by zero.
const SMALL: f64 = 1.0e-15;

/// Relative tolerance when checking that two molar masses describe the same species.
const MOLAR_MASS_REL_TOL: f64 = 1.0e-9;

/// Ideal gas equation of state with an amount and a valid temperature range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGas {
    moles: f64,
    molar_mass: MolarMass,
    t_low: ThermodynamicTemperature,
    t_high: ThermodynamicTemperature,
}

/// Configuration record for an [`IdealGas`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealGasRecord {
    /// Amount of substance, defaults to one.
    #[serde(default = "IdealGasRecord::default_moles")]
    pub moles: f64,
    /// Molar mass in g/mol (equivalently kg/kmol).
    pub molar_mass: f64,
    /// Lower bound of the valid temperature range in kelvin.
    pub t_low: f64,
    /// Upper bound of the valid temperature range in kelvin.
    pub t_high: f64,
}

impl IdealGasRecord {
    fn default_moles() -> f64 {
        1.0
    }
}

impl IdealGas {
    /// Creates one mole of an ideal gas.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::MalformedInput`] if the molar mass or the low
    /// temperature is not strictly positive, or if `t_high <= t_low`.
    pub fn new(
        molar_mass: MolarMass,
        t_low: ThermodynamicTemperature,
        t_high: ThermodynamicTemperature,
    ) -> Result<Self, ThermoError> {
        Self::with_moles(1.0, molar_mass, t_low, t_high)
    }

    /// Creates an ideal gas standing for `moles` of substance.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::MalformedInput`] if `moles`, the molar mass, or
    /// the low temperature is not strictly positive, or if `t_high <= t_low`.
    pub fn with_moles(
        moles: f64,
        molar_mass: MolarMass,
        t_low: ThermodynamicTemperature,
        t_high: ThermodynamicTemperature,
    ) -> Result<Self, ThermoError> {
        let moles = StrictlyPositive::new(moles)
            .map_err(|e| ThermoError::invalid("moles", e))?
            .into_inner();

        let molar_mass = StrictlyPositive::new(molar_mass)
            .map_err(|e| ThermoError::invalid("molar mass", e))?
            .into_inner();

        StrictlyPositive::check(&t_low.get::<kelvin>())
            .map_err(|e| ThermoError::invalid("low temperature", e))?;

        if !(t_high > t_low) {
            return Err(ThermoError::malformed(format!(
                "high temperature {} K must exceed low temperature {} K",
                t_high.get::<kelvin>(),
                t_low.get::<kelvin>()
            )));
        }

        Ok(Self {
            moles,
            molar_mass,
            t_low,
            t_high,
        })
    }

    /// Computes pressure with `p = ρ·(R/W)·T`.
    #[must_use]
    pub fn pressure(
        &self,
        density: MassDensity,
        temperature: ThermodynamicTemperature,
    ) -> Pressure {
        density * standard::gas_constant() * temperature / self.molar_mass
    }

    /// Total mass in kilograms, `n·W`.
    fn mass_kg(&self) -> f64 {
        self.moles * self.molar_mass.get::<kilogram_per_mole>()
    }
}

impl EquationOfState for IdealGas {
    const TYPE_NAME: &'static str = "idealGas";

    type Record = IdealGasRecord;

    /// Accepts any state the mixing operators can produce: a finite amount,
    /// a finite non-zero molar mass, and positive range bounds.
    fn from_record(record: &IdealGasRecord) -> Result<Self, ThermoError> {
        if !record.moles.is_finite() {
            return Err(ThermoError::malformed("moles: value must be finite"));
        }
        if !record.molar_mass.is_finite() || record.molar_mass == 0.0 {
            return Err(ThermoError::malformed(
                "molar mass: value must be finite and non-zero",
            ));
        }
        StrictlyPositive::check(&record.t_low)
            .map_err(|e| ThermoError::invalid("low temperature", e))?;
        StrictlyPositive::check(&record.t_high)
            .map_err(|e| ThermoError::invalid("high temperature", e))?;

        if record.t_low > record.t_high {
            tracing::warn!(
                t_low_k = record.t_low,
                t_high_k = record.t_high,
                "ideal gas record has an empty valid temperature range"
            );
        }

        Ok(Self {
            moles: record.moles,
            molar_mass: MolarMass::new::<gram_per_mole>(record.molar_mass),
            t_low: ThermodynamicTemperature::new::<kelvin>(record.t_low),
            t_high: ThermodynamicTemperature::new::<kelvin>(record.t_high),
        })
    }

    fn to_record(&self) -> IdealGasRecord {
        IdealGasRecord {
            moles: self.moles,
            molar_mass: self.molar_mass.get::<gram_per_mole>(),
            t_low: self.t_low.get::<kelvin>(),
            t_high: self.t_high.get::<kelvin>(),
        }
    }

    fn moles(&self) -> f64 {
        self.moles
    }

    fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }

    fn valid_temperature_range(&self) -> (ThermodynamicTemperature, ThermodynamicTemperature) {
        (self.t_low, self.t_high)
    }

    /// Computes density with `ρ = p·W/(R·T)`.
    fn density(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MassDensity {
        pressure * self.molar_mass / (standard::gas_constant() * temperature)
    }

    /// Returns `R`, independent of state.
    fn cp_minus_cv(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
    ) -> MolarEntropy {
        standard::gas_constant()
    }

    fn equate(&self, other: &Self) -> Result<Self, ThermoError> {
        let w1 = self.molar_mass.get::<kilogram_per_mole>();
        let w2 = other.molar_mass.get::<kilogram_per_mole>();
        if (w1 - w2).abs() > MOLAR_MASS_REL_TOL * w1.max(w2) {
            return Err(ThermoError::ShapeMismatch {
                context: format!(
                    "molar masses differ: {} g/mol vs {} g/mol",
                    self.molar_mass.get::<gram_per_mole>(),
                    other.molar_mass.get::<gram_per_mole>()
                ),
            });
        }

        if self.valid_temperature_range() != other.valid_temperature_range() {
            return Err(ThermoError::ShapeMismatch {
                context: format!(
                    "temperature ranges differ: [{}, {}] K vs [{}, {}] K",
                    self.t_low.get::<kelvin>(),
                    self.t_high.get::<kelvin>(),
                    other.t_low.get::<kelvin>(),
                    other.t_high.get::<kelvin>()
                ),
            });
        }

        Ok(*self + *other)
    }
}

/// Floors a vanishing amount or mass at `SMALL` and returns the amount with
/// the molar mass recovered from it.
fn floored(mut moles: f64, mut mass: f64, message: &str) -> (f64, MolarMass) {
    if moles.abs() < SMALL || mass.abs() < SMALL {
        tracing::warn!(moles, mass, "{message}");
        if moles.abs() < SMALL {
            moles = SMALL;
        }
        if mass.abs() < SMALL {
            mass = SMALL;
        }
    }

    (moles, MolarMass::new::<kilogram_per_mole>(mass / moles))
}

impl Add for IdealGas {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (moles, molar_mass) = floored(
            self.moles + rhs.moles,
            self.mass_kg() + rhs.mass_kg(),
            "ideal gas sum is degenerate",
        );

        let t_low = if self.t_low > rhs.t_low { self.t_low } else { rhs.t_low };
        let t_high = if self.t_high < rhs.t_high { self.t_high } else { rhs.t_high };
        if t_low > t_high {
            tracing::warn!(
                t_low_k = t_low.get::<kelvin>(),
                t_high_k = t_high.get::<kelvin>(),
                "combined ideal gas has an empty valid temperature range"
            );
        }

        Self {
            moles,
            molar_mass,
            t_low,
            t_high,
        }
    }
}

impl Sub for IdealGas {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let (moles, molar_mass) = floored(
            self.moles - rhs.moles,
            self.mass_kg() - rhs.mass_kg(),
            "ideal gas difference is degenerate",
        );

        Self {
            moles,
            molar_mass,
            ..self
        }
    }
}

impl Mul<f64> for IdealGas {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            moles: self.moles * rhs,
            ..self
        }
    }
}

impl Mul<IdealGas> for f64 {
    type Output = IdealGas;

    fn mul(self, rhs: IdealGas) -> IdealGas {
        rhs * self
    }
}

/// Writes `moles molar_mass[g/mol] t_low[K] t_high[K]`.
impl fmt::Display for IdealGas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.moles,
            self.molar_mass.get::<gram_per_mole>(),
            self.t_low.get::<kelvin>(),
            self.t_high.get::<kelvin>()
        )
    }
}

impl FromTokens for IdealGas {
    type Error = ThermoError;

    fn from_tokens<'a, I>(tokens: &mut I) -> Result<Self, ThermoError>
    where
        I: Iterator<Item = &'a str>,
    {
        let record = IdealGasRecord {
            moles: next_scalar(tokens, "moles")?,
            molar_mass: next_scalar(tokens, "molar mass")?,
            t_low: next_scalar(tokens, "low temperature")?,
            t_high: next_scalar(tokens, "high temperature")?,
        };
        Self::from_record(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, molar_heat_capacity::joule_per_kelvin_mole,
        pressure::kilopascal,
    };

    use crate::support::tokens::parse_all;

    fn gas(molar_mass: f64) -> IdealGas {
        IdealGas::new(
            MolarMass::new::<gram_per_mole>(molar_mass),
            ThermodynamicTemperature::new::<kelvin>(200.0),
            ThermodynamicTemperature::new::<kelvin>(3000.0),
        )
        .unwrap()
    }

    #[test]
    fn air_density() {
        let air = gas(28.96);
        let p = Pressure::new::<kilopascal>(101.325);
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);

        let expected = 101_325.0 * 0.02896 / (standard::GAS_CONSTANT_J_PER_MOL_K * 300.0);
        assert_relative_eq!(
            air.density(p, t).get::<kilogram_per_cubic_meter>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn pressure_density_roundtrip() {
        let air = gas(28.96);
        let p = Pressure::new::<kilopascal>(250.0);
        let t = ThermodynamicTemperature::new::<kelvin>(350.0);

        let rho = air.density(p, t);
        assert_relative_eq!(
            air.pressure(rho, t).get::<kilopascal>(),
            250.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn cp_minus_cv_is_gas_constant() {
        let air = gas(28.96);
        let r = air.cp_minus_cv(standard::pressure(), standard::temperature());
        assert_relative_eq!(
            r.get::<joule_per_kelvin_mole>(),
            standard::GAS_CONSTANT_J_PER_MOL_K
        );
    }

    #[test]
    fn rejects_invalid_parameters() {
        let t_low = ThermodynamicTemperature::new::<kelvin>(200.0);
        let t_high = ThermodynamicTemperature::new::<kelvin>(3000.0);
        let w = MolarMass::new::<gram_per_mole>(28.0);

        assert!(IdealGas::new(MolarMass::new::<gram_per_mole>(0.0), t_low, t_high).is_err());
        assert!(IdealGas::new(w, t_high, t_low).is_err());
        assert!(IdealGas::new(w, ThermodynamicTemperature::new::<kelvin>(0.0), t_high).is_err());
        assert!(IdealGas::with_moles(-1.0, w, t_low, t_high).is_err());
    }

    #[test]
    fn mixing_is_mole_weighted() {
        let n2 = gas(28.0);
        let o2 = gas(32.0) * 3.0;

        let mix = n2 + o2;
        assert_relative_eq!(mix.moles(), 4.0);
        assert_relative_eq!(
            mix.molar_mass().get::<gram_per_mole>(),
            31.0,
            max_relative = 1e-12
        );

        let back = mix - o2;
        assert_relative_eq!(back.moles(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(
            back.molar_mass().get::<gram_per_mole>(),
            28.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn mixing_intersects_ranges() {
        let wide = gas(28.0);
        let narrow = IdealGas::new(
            MolarMass::new::<gram_per_mole>(32.0),
            ThermodynamicTemperature::new::<kelvin>(300.0),
            ThermodynamicTemperature::new::<kelvin>(1000.0),
        )
        .unwrap();

        let (t_low, t_high) = (wide + narrow).valid_temperature_range();
        assert_relative_eq!(t_low.get::<kelvin>(), 300.0);
        assert_relative_eq!(t_high.get::<kelvin>(), 1000.0);
    }

    #[test]
    fn degenerate_difference_stays_finite() {
        let n2 = gas(28.0);
        let diff = n2 - n2;
        assert!(diff.moles() > 0.0);
        assert!(diff.molar_mass().get::<kilogram_per_mole>().is_finite());
    }

    #[test]
    fn zero_amount_sum_stays_finite() {
        let n2 = gas(28.0);

        for sum in [0.0 * n2 + 0.0 * n2, n2 + (-1.0 * n2)] {
            assert!(sum.moles() > 0.0);
            assert!(sum.molar_mass().get::<kilogram_per_mole>().is_finite());
            assert!(
                sum.density(standard::pressure(), standard::temperature())
                    .get::<kilogram_per_cubic_meter>()
                    .is_finite()
            );
        }
    }

    #[test]
    fn composed_states_read_back() {
        let n2 = gas(28.0134);
        let co2 = gas(44.01);

        for composed in [n2 - 2.0 * n2, n2 - co2, 0.0 * n2] {
            let back: IdealGas = parse_all(&composed.to_string()).unwrap();
            assert_relative_eq!(back.moles(), composed.moles(), max_relative = 1e-12);
            assert_relative_eq!(
                back.molar_mass().get::<gram_per_mole>(),
                composed.molar_mass().get::<gram_per_mole>(),
                max_relative = 1e-12
            );

            let record = IdealGas::from_record(&composed.to_record()).unwrap();
            assert_relative_eq!(record.moles(), composed.moles(), max_relative = 1e-12);
        }

        assert!(parse_all::<IdealGas>("1 0 200 3000").is_err());
        assert!(parse_all::<IdealGas>("1 28 0 3000").is_err());
    }

    #[test]
    fn equate_requires_same_species() {
        let a = gas(28.0134);
        let merged = a.equate(&(a * 2.0)).unwrap();
        assert_relative_eq!(merged.moles(), 3.0);
        assert_relative_eq!(
            merged.molar_mass().get::<gram_per_mole>(),
            28.0134,
            max_relative = 1e-12
        );

        let err = a.equate(&gas(32.0)).unwrap_err();
        assert!(matches!(err, ThermoError::ShapeMismatch { .. }));
    }

    #[test]
    fn text_roundtrip() {
        let a = IdealGas::with_moles(
            2.0,
            MolarMass::new::<gram_per_mole>(18.015),
            ThermodynamicTemperature::new::<kelvin>(273.15),
            ThermodynamicTemperature::new::<kelvin>(1500.0),
        )
        .unwrap();

        let back: IdealGas = parse_all(&a.to_string()).unwrap();
        assert_relative_eq!(back.moles(), 2.0);
        assert_relative_eq!(
            back.molar_mass().get::<gram_per_mole>(),
            18.015,
            max_relative = 1e-12
        );
        assert_eq!(back.valid_temperature_range(), a.valid_temperature_range());

        assert!(parse_all::<IdealGas>("1 18.015 273.15").is_err());
        assert!(parse_all::<IdealGas>("1 water 273.15 1500").is_err());
    }

    #[test]
    fn record_defaults_to_one_mole() {
        let record: IdealGasRecord =
            serde_json::from_str(r#"{"molar_mass": 44.01, "t_low": 200, "t_high": 3500}"#)
                .unwrap();
        assert_eq!(record.moles, 1.0);

        let co2 = IdealGas::from_record(&record).unwrap().to_record();
        assert_relative_eq!(co2.molar_mass, 44.01, max_relative = 1e-12);
        assert_eq!((co2.t_low, co2.t_high), (200.0, 3500.0));
    }
}
