//! Polynomial heat capacity thermo model.
//!
//! `HPolynomial` fits `cp(T)` with a fixed-size polynomial and derives
//! enthalpy and entropy from it analytically:
//!
//! - `cp(T) = Σ cᵢ·Tⁱ`
//! - `hs(T) = ∫ cp dT` from `T_std` to `T`
//! - `s(T) = s_f + ∫ cp/T dT` from `T_std` to `T`
//!
//! The enthalpy and entropy coefficients are derived once from the `cp`
//! coefficients and re-derived whenever those change, so all three stay
//! consistent.
//!
//! # Units
//!
//! Heat of formation, standard entropy and `cp` coefficients are supplied
//! per unit mass and stored per mole, converted with the molar mass of the
//! equation of state at construction. All properties are reported per mole.
//!
//! # Temperature Limits
//!
//! Every evaluation first clamps the temperature into the equation of state's
//! valid range. Clamping is silent by default; see [`TemperatureLimit`].
//!
//! # Mixing
//!
//! `a + b`, `a - b` and `s * a` combine the equations of state, then weight
//! heat of formation, standard entropy and `cp` coefficients by each operand's
//! share of the combined amount. Enthalpy and entropy coefficients are then
//! derived from the combined `cp` coefficients.

use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
    str::FromStr,
};

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, MolarHeatCapacity, Pressure, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_mass::kilogram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    polynomial::{Antiderivative, LogPolynomial, Polynomial},
    thermo::{
        ThermoError,
        capability::{EquationOfState, ThermoProperties},
        record::HPolynomialRecord,
        standard,
    },
    tokens::{self, FromTokens, next_scalar},
    units::{MolarEnthalpy, MolarEntropy, MolarInternalEnergy, SpecificEnthalpy, SpecificEntropy},
};

/// What to do when a property is requested outside the valid temperature range.
///
/// Both policies clamp; out-of-range input is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureLimit {
    /// Clamp without reporting.
    #[default]
    Clamp,
    /// Clamp and emit a `tracing` warning.
    ClampWithWarning,
}

/// Thermo model with polynomial `cp(T)` layered on an equation of state `E`.
///
/// `N` is the number of `cp` coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HPolynomial<E, const N: usize = 8> {
    eos: E,
    hf: MolarEnthalpy,
    sf: MolarEntropy,
    cp_coeffs: Polynomial<N>,
    h_coeffs: Antiderivative<N>,
    s_coeffs: LogPolynomial<N>,
    limit_policy: TemperatureLimit,
}

impl<E: EquationOfState, const N: usize> HPolynomial<E, N> {
    /// Creates a thermo model from mass-specific data.
    ///
    /// `cp_coeffs` are in J/(kg·K^(i+1)), ascending power order.
    #[must_use]
    pub fn new(
        eos: E,
        hf: SpecificEnthalpy,
        sf: SpecificEntropy,
        cp_coeffs: Polynomial<N>,
    ) -> Self {
        let w = eos.molar_mass();
        Self::from_molar(
            eos,
            hf * w,
            sf * w,
            cp_coeffs * w.get::<kilogram_per_mole>(),
            TemperatureLimit::default(),
        )
    }

    /// Creates a thermo model from a configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::MalformedInput`] if the record does not hold
    /// exactly `N` finite `cp` coefficients or its reference values are not finite.
    pub fn from_record(eos: E, record: &HPolynomialRecord) -> Result<Self, ThermoError> {
        let cp_coeffs = <[f64; N]>::try_from(record.cp_coeffs.as_slice()).map_err(|_| {
            ThermoError::malformed(format!(
                "expected {N} cp coefficients, found {}",
                record.cp_coeffs.len()
            ))
        })?;

        if !record.hf.is_finite() || !record.sf.is_finite() {
            return Err(ThermoError::malformed(
                "heat of formation and standard entropy must be finite",
            ));
        }
        if cp_coeffs.iter().any(|c| !c.is_finite()) {
            return Err(ThermoError::malformed("cp coefficients must be finite"));
        }

        Ok(Self::new(
            eos,
            SpecificEnthalpy::new::<joule_per_kilogram>(record.hf),
            SpecificEntropy::new::<joule_per_kilogram_kelvin>(record.sf),
            Polynomial::new(cp_coeffs),
        ))
    }

    /// Returns the configuration record, in mass-specific units.
    #[must_use]
    pub fn to_record(&self) -> HPolynomialRecord {
        let w = self.eos.molar_mass().get::<kilogram_per_mole>();
        HPolynomialRecord {
            hf: self.hf.get::<joule_per_mole>() / w,
            sf: self.sf.get::<joule_per_kelvin_mole>() / w,
            cp_coeffs: self.mass_specific_cp_coeffs().coefficients().to_vec(),
        }
    }

    /// Returns the composite type name, e.g. `hPolynomial<idealGas>`.
    #[must_use]
    pub fn type_name() -> String {
        format!("hPolynomial<{}>", E::TYPE_NAME)
    }

    /// Returns this model with the given out-of-range policy.
    #[must_use]
    pub fn with_limit_policy(mut self, limit_policy: TemperatureLimit) -> Self {
        self.limit_policy = limit_policy;
        self
    }

    /// Returns the out-of-range policy.
    #[must_use]
    pub fn limit_policy(&self) -> TemperatureLimit {
        self.limit_policy
    }

    /// Returns the underlying equation of state.
    #[must_use]
    pub fn equation_of_state(&self) -> &E {
        &self.eos
    }

    /// Returns the molar heat of formation.
    #[must_use]
    pub fn heat_of_formation(&self) -> MolarEnthalpy {
        self.hf
    }

    /// Returns the molar standard entropy.
    #[must_use]
    pub fn standard_entropy(&self) -> MolarEntropy {
        self.sf
    }

    /// Returns the molar `cp` coefficients, J/(mol·K^(i+1)).
    #[must_use]
    pub fn cp_coeffs(&self) -> &Polynomial<N> {
        &self.cp_coeffs
    }

    /// Returns the `cp` coefficients per unit mass, J/(kg·K^(i+1)).
    #[must_use]
    pub fn mass_specific_cp_coeffs(&self) -> Polynomial<N> {
        self.cp_coeffs * (1.0 / self.eos.molar_mass().get::<kilogram_per_mole>())
    }

    /// Returns the sensible enthalpy polynomial, J/mol, zero at `T_std`.
    #[must_use]
    pub fn h_coeffs(&self) -> &Antiderivative<N> {
        &self.h_coeffs
    }

    /// Returns the entropy correlation, J/(mol·K), zero at `T_std`.
    #[must_use]
    pub fn s_coeffs(&self) -> &LogPolynomial<N> {
        &self.s_coeffs
    }

    /// Merges another definition of the same species into this one.
    ///
    /// The equation of state decides whether the two definitions describe the
    /// same substance. The result carries the combined equation of state and
    /// amount-weighted reference values and `cp` coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::ShapeMismatch`] if the equations of state disagree.
    pub fn equate(&self, other: &Self) -> Result<Self, ThermoError> {
        let eos = self.eos.equate(&other.eos)?;
        Ok(self.mix(other, eos, 1.0))
    }

    /// Builds from molar data, deriving the enthalpy and entropy coefficients.
    fn from_molar(
        eos: E,
        hf: MolarEnthalpy,
        sf: MolarEntropy,
        cp_coeffs: Polynomial<N>,
        limit_policy: TemperatureLimit,
    ) -> Self {
        let t_std = standard::TEMPERATURE_K;

        let mut h_coeffs = cp_coeffs.integral();
        h_coeffs.set_constant(-h_coeffs.evaluate(t_std));

        let mut s_coeffs = cp_coeffs.integral_minus_one();
        s_coeffs.set_constant(-s_coeffs.evaluate(t_std));

        Self {
            eos,
            hf,
            sf,
            cp_coeffs,
            h_coeffs,
            s_coeffs,
            limit_policy,
        }
    }

    /// Combines `self` and `sign * other` into the already-combined `eos`.
    fn mix(&self, other: &Self, eos: E, sign: f64) -> Self {
        let w_self = self.eos.moles() / eos.moles();
        let w_other = sign * other.eos.moles() / eos.moles();

        Self::from_molar(
            eos,
            self.hf * w_self + other.hf * w_other,
            self.sf * w_self + other.sf * w_other,
            self.cp_coeffs * w_self + other.cp_coeffs * w_other,
            self.limit_policy,
        )
    }
}

impl<E: EquationOfState, const N: usize> ThermoProperties for HPolynomial<E, N> {
    fn valid_temperature_range(&self) -> (ThermodynamicTemperature, ThermodynamicTemperature) {
        self.eos.valid_temperature_range()
    }

    fn limit(&self, temperature: ThermodynamicTemperature) -> ThermodynamicTemperature {
        let (t_low, t_high) = self.eos.valid_temperature_range();

        let limited = if temperature < t_low {
            t_low
        } else if temperature > t_high {
            t_high
        } else {
            return temperature;
        };

        if self.limit_policy == TemperatureLimit::ClampWithWarning {
            tracing::warn!(
                model = %Self::type_name(),
                temperature_k = temperature.get::<kelvin>(),
                t_low_k = t_low.get::<kelvin>(),
                t_high_k = t_high.get::<kelvin>(),
                "temperature outside valid range, clamping"
            );
        }

        limited
    }

    /// Evaluates the `cp` polynomial; `pressure` is unused.
    fn cp(&self, _pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarHeatCapacity {
        let t = self.limit(temperature).get::<kelvin>();
        MolarHeatCapacity::new::<joule_per_kelvin_mole>(self.cp_coeffs.evaluate(t))
    }

    /// Computes `cv = cp − (cp − cv)`, the difference supplied by the equation of state.
    fn cv(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarHeatCapacity {
        let t = self.limit(temperature);
        self.cp(pressure, t) - self.eos.cp_minus_cv(pressure, t)
    }

    /// Evaluates the enthalpy polynomial; `pressure` is unused.
    fn hs(&self, _pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarEnthalpy {
        let t = self.limit(temperature).get::<kelvin>();
        MolarEnthalpy::new::<joule_per_mole>(self.h_coeffs.evaluate(t))
    }

    fn hc(&self) -> MolarEnthalpy {
        self.hf
    }

    /// Computes `es = hs − p·W/ρ`.
    fn es(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> MolarInternalEnergy {
        let t = self.limit(temperature);
        self.hs(pressure, t) - pressure * self.eos.molar_mass() / self.eos.density(pressure, t)
    }

    /// Evaluates the entropy correlation plus the standard entropy; `pressure` is unused.
    fn s(&self, _pressure: Pressure, temperature: ThermodynamicTemperature) -> MolarEntropy {
        let t = self.limit(temperature).get::<kelvin>();
        MolarEntropy::new::<joule_per_kelvin_mole>(self.s_coeffs.evaluate(t)) + self.sf
    }

    fn density(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MassDensity {
        self.eos.density(pressure, self.limit(temperature))
    }
}

impl<E: EquationOfState, const N: usize> AddAssign for HPolynomial<E, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.mix(&rhs, self.eos + rhs.eos, 1.0);
    }
}

impl<E: EquationOfState, const N: usize> SubAssign for HPolynomial<E, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.mix(&rhs, self.eos - rhs.eos, -1.0);
    }
}

/// Scales the amount; intensive data is unchanged.
impl<E: EquationOfState, const N: usize> MulAssign<f64> for HPolynomial<E, N> {
    fn mul_assign(&mut self, rhs: f64) {
        self.eos = self.eos * rhs;
    }
}

impl<E: EquationOfState, const N: usize> Add for HPolynomial<E, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<E: EquationOfState, const N: usize> Sub for HPolynomial<E, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<E: EquationOfState, const N: usize> Mul<f64> for HPolynomial<E, N> {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self {
        self *= rhs;
        self
    }
}

impl<E: EquationOfState, const N: usize> Mul<HPolynomial<E, N>> for f64 {
    type Output = HPolynomial<E, N>;

    fn mul(self, rhs: HPolynomial<E, N>) -> HPolynomial<E, N> {
        rhs * self
    }
}

/// Writes the equation of state, then `hf sf c₀ … c_{N-1}` per unit mass.
impl<E: EquationOfState, const N: usize> fmt::Display for HPolynomial<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.to_record();
        write!(
            f,
            "{} {} {} {}",
            self.eos,
            record.hf,
            record.sf,
            self.mass_specific_cp_coeffs()
        )
    }
}

impl<E: EquationOfState, const N: usize> FromTokens for HPolynomial<E, N> {
    type Error = ThermoError;

    fn from_tokens<'a, I>(tokens: &mut I) -> Result<Self, ThermoError>
    where
        I: Iterator<Item = &'a str>,
    {
        let eos = E::from_tokens(tokens)?;
        let hf = next_scalar(tokens, "heat of formation")?;
        let sf = next_scalar(tokens, "standard entropy")?;
        let cp_coeffs = Polynomial::<N>::from_tokens(tokens)?;

        Ok(Self::new(
            eos,
            SpecificEnthalpy::new::<joule_per_kilogram>(hf),
            SpecificEntropy::new::<joule_per_kilogram_kelvin>(sf),
            cp_coeffs,
        ))
    }
}

impl<E: EquationOfState, const N: usize> FromStr for HPolynomial<E, N> {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, ThermoError> {
        tokens::parse_all(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        f64::MolarMass, molar_mass::gram_per_mole, pressure::kilopascal, ratio::ratio,
    };

    use crate::support::thermo::eos::IdealGas;

    const W_N2: f64 = 28.0134;

    fn gas(molar_mass: f64) -> IdealGas {
        IdealGas::new(
            MolarMass::new::<gram_per_mole>(molar_mass),
            ThermodynamicTemperature::new::<kelvin>(200.0),
            ThermodynamicTemperature::new::<kelvin>(3000.0),
        )
        .unwrap()
    }

    fn thermo<const N: usize>(
        eos: IdealGas,
        hf: f64,
        sf: f64,
        cp: [f64; N],
    ) -> HPolynomial<IdealGas, N> {
        HPolynomial::new(
            eos,
            SpecificEnthalpy::new::<joule_per_kilogram>(hf),
            SpecificEntropy::new::<joule_per_kilogram_kelvin>(sf),
            Polynomial::new(cp),
        )
    }

    fn linear_cp() -> HPolynomial<IdealGas, 2> {
        thermo(gas(W_N2), 0.0, 0.0, [1000.0, 2.0])
    }

    fn temp(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    fn p() -> Pressure {
        standard::pressure()
    }

    #[test]
    fn linear_cp_at_standard_temperature() {
        let th = linear_cp();
        let t_std = standard::temperature();

        assert_eq!(th.hs(p(), t_std).get::<joule_per_mole>(), 0.0);

        let w = W_N2 / 1000.0;
        assert_relative_eq!(
            th.cp(p(), t_std).get::<joule_per_kelvin_mole>(),
            (1000.0 + 2.0 * 298.15) * w,
            max_relative = 1e-12
        );
    }

    #[test]
    fn enthalpy_is_integral_of_cp() {
        let th = thermo(gas(W_N2), 0.0, 0.0, [1000.0, 0.2, -1.0e-4, 3.0e-8]);
        for (x, y) in th
            .h_coeffs()
            .derivative()
            .coefficients()
            .iter()
            .zip(th.cp_coeffs().coefficients())
        {
            assert_relative_eq!(*x, *y, max_relative = 1e-14);
        }

        let t1: f64 = 400.0;
        let t2: f64 = 1200.0;
        let w = W_N2 / 1000.0;
        let exact = w
            * (1000.0 * (t2 - t1) + 0.1 * (t2 * t2 - t1 * t1)
                - 1.0e-4 / 3.0 * (t2.powi(3) - t1.powi(3))
                + 3.0e-8 / 4.0 * (t2.powi(4) - t1.powi(4)));
        let dh = th.hs(p(), temp(t2)) - th.hs(p(), temp(t1));
        assert_relative_eq!(dh.get::<joule_per_mole>(), exact, max_relative = 1e-10);
    }

    #[test]
    fn entropy_is_integral_of_cp_over_t() {
        let th = thermo(gas(W_N2), 0.0, 6840.0, [1000.0, 0.2]);
        let w = W_N2 / 1000.0;

        assert_relative_eq!(
            th.s(p(), standard::temperature()).get::<joule_per_kelvin_mole>(),
            6840.0 * w,
            max_relative = 1e-12
        );

        let t: f64 = 800.0;
        let expected = w * (6840.0 + 1000.0 * (t / 298.15).ln() + 0.2 * (t - 298.15));
        assert_relative_eq!(
            th.s(p(), temp(t)).get::<joule_per_kelvin_mole>(),
            expected,
            max_relative = 1e-10
        );
    }

    #[test]
    fn chemical_enthalpy_is_molar_heat_of_formation() {
        let th = thermo(gas(18.015), -1.342e7, 10_480.0, [1800.0, 0.3]);
        let w = 18.015 / 1000.0;

        assert_relative_eq!(
            th.hc().get::<joule_per_mole>(),
            -1.342e7 * w,
            max_relative = 1e-12
        );

        let t = temp(600.0);
        assert_relative_eq!(
            th.ha(p(), t).get::<joule_per_mole>(),
            (th.hs(p(), t) + th.hc()).get::<joule_per_mole>()
        );
        assert_relative_eq!(
            th.ha(p(), standard::temperature()).get::<joule_per_mole>(),
            th.hc().get::<joule_per_mole>()
        );
    }

    #[test]
    fn limit_clamps_and_is_idempotent() {
        let th = linear_cp();

        let inside = temp(500.0);
        assert_eq!(th.limit(inside), inside);

        for t in [50.0, 200.0, 1500.0, 3000.0, 5000.0] {
            let once = th.limit(temp(t));
            assert_eq!(th.limit(once), once);
        }

        assert_eq!(th.limit(temp(50.0)), temp(200.0));
        assert_eq!(th.limit(temp(5000.0)), temp(3000.0));
    }

    #[test]
    fn evaluation_below_range_matches_lower_bound() {
        let th = linear_cp();
        assert_eq!(th.cp(p(), temp(100.0)), th.cp(p(), temp(200.0)));
        assert_eq!(th.hs(p(), temp(100.0)), th.hs(p(), temp(200.0)));
        assert_eq!(th.s(p(), temp(100.0)), th.s(p(), temp(200.0)));
        assert_eq!(th.cp(p(), temp(4000.0)), th.cp(p(), temp(3000.0)));
    }

    #[test]
    fn warning_policy_still_clamps() {
        let th = linear_cp().with_limit_policy(TemperatureLimit::ClampWithWarning);
        assert_eq!(th.limit_policy(), TemperatureLimit::ClampWithWarning);
        assert_eq!(th.cp(p(), temp(100.0)), linear_cp().cp(p(), temp(200.0)));
    }

    #[test]
    fn evaluation_is_reproducible() {
        let th = thermo(gas(W_N2), 1.0e5, 6840.0, [1000.0, 0.2, -1.0e-4]);
        let t = temp(912.3);
        assert_eq!(th.cp(p(), t), th.cp(p(), t));
        assert_eq!(th.ha(p(), t), th.ha(p(), t));
        assert_eq!(th.s(p(), t), th.s(p(), t));
    }

    #[test]
    fn ideal_gas_derived_properties() {
        let th = linear_cp();
        let t = temp(500.0);
        let pres = Pressure::new::<kilopascal>(300.0);
        let r = standard::GAS_CONSTANT_J_PER_MOL_K;

        let cp = th.cp(pres, t).get::<joule_per_kelvin_mole>();
        let cv = th.cv(pres, t).get::<joule_per_kelvin_mole>();
        assert_relative_eq!(cp - cv, r, max_relative = 1e-12);
        assert_relative_eq!(th.gamma(pres, t).get::<ratio>(), cp / cv);

        let hs = th.hs(pres, t).get::<joule_per_mole>();
        assert_relative_eq!(
            th.es(pres, t).get::<joule_per_mole>(),
            hs - r * 500.0,
            max_relative = 1e-10
        );

        let g = th.ha(pres, t).get::<joule_per_mole>()
            - 500.0 * th.s(pres, t).get::<joule_per_kelvin_mole>();
        assert_relative_eq!(th.g(pres, t).get::<joule_per_mole>(), g, max_relative = 1e-10);
        assert_relative_eq!(
            th.a(pres, t).get::<joule_per_mole>(),
            g - r * 500.0,
            max_relative = 1e-10
        );
    }

    #[test]
    fn sum_then_difference_restores_cp() {
        let a = thermo(gas(28.0134), 0.0, 6840.0, [1000.0, 0.2, -1.0e-5]);
        let b = thermo(gas(31.9988), 0.0, 6410.0, [900.0, 0.3, 2.0e-5]) * 2.0;

        let restored = (a + b) - b;
        for (x, y) in restored
            .cp_coeffs()
            .coefficients()
            .iter()
            .zip(a.cp_coeffs().coefficients())
        {
            assert_relative_eq!(*x, *y, max_relative = 1e-9);
        }
        assert_relative_eq!(
            restored.standard_entropy().get::<joule_per_kelvin_mole>(),
            a.standard_entropy().get::<joule_per_kelvin_mole>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn equal_halves_reproduce_species() {
        let a = thermo(gas(W_N2), 0.0, 6840.0, [1000.0, 0.2]);
        let mix = 0.5 * a + 0.5 * a;

        assert_relative_eq!(mix.equation_of_state().moles(), 1.0);
        for (x, y) in mix
            .cp_coeffs()
            .coefficients()
            .iter()
            .zip(a.cp_coeffs().coefficients())
        {
            assert_relative_eq!(*x, *y, max_relative = 1e-12);
        }
    }

    #[test]
    fn composition_rederives_reference_offsets() {
        let a = thermo(gas(28.0134), 0.0, 0.0, [1000.0, 0.2]);
        let b = thermo(gas(31.9988), 0.0, 0.0, [900.0, 0.3]);

        let mut mix = a;
        mix += b;
        assert_eq!(mix, a + b);

        let t_std = standard::temperature();
        assert_relative_eq!(mix.hs(p(), t_std).get::<joule_per_mole>(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(
            mix.s(p(), t_std).get::<joule_per_kelvin_mole>(),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn scaling_changes_amount_only() {
        let a = linear_cp();
        let mut scaled = a;
        scaled *= 3.0;

        assert_eq!(scaled, 3.0 * a);
        assert_relative_eq!(scaled.equation_of_state().moles(), 3.0);
        assert_eq!(scaled.cp_coeffs(), a.cp_coeffs());
        assert_eq!(scaled.hs(p(), temp(700.0)), a.hs(p(), temp(700.0)));
    }

    #[test]
    fn operators_leave_operands_untouched() {
        let a = linear_cp();
        let b = thermo(gas(31.9988), 0.0, 0.0, [900.0, 0.3]);
        let (a0, b0) = (a, b);

        let _ = a + b;
        let _ = a - b;
        let _ = 2.0 * a;
        assert_eq!((a, b), (a0, b0));
    }

    #[test]
    fn equate_merges_same_species() {
        let a = thermo(gas(W_N2), 0.0, 6840.0, [1000.0, 0.2]);
        let b = thermo(gas(W_N2), 0.0, 6840.0, [1010.0, 0.1]);

        let merged = a.equate(&b).unwrap();
        assert_relative_eq!(merged.equation_of_state().moles(), 2.0);
        assert_relative_eq!(
            merged.mass_specific_cp_coeffs()[0],
            1005.0,
            max_relative = 1e-12
        );

        let other = thermo(gas(31.9988), 0.0, 6410.0, [900.0, 0.3]);
        assert!(matches!(
            a.equate(&other),
            Err(ThermoError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn zero_amount_sum_keeps_properties_finite() {
        let a = linear_cp();
        let t = temp(800.0);

        for sum in [0.0 * a + 0.0 * a, a + (-1.0 * a)] {
            assert!(sum.cp(p(), t).get::<joule_per_kelvin_mole>().is_finite());
            assert!(sum.hs(p(), t).get::<joule_per_mole>().is_finite());
            assert!(sum.s(p(), t).get::<joule_per_kelvin_mole>().is_finite());
            assert!(sum.es(p(), t).get::<joule_per_mole>().is_finite());
        }
    }

    #[test]
    fn composed_difference_text_roundtrip() {
        let a = linear_cp();
        let b = thermo(gas(44.01), -8.94e6, 4860.0, [850.0, 0.4]);

        for composed in [a - 2.0 * a, a - b] {
            let first = composed.to_string();
            let second = first.parse::<HPolynomial<IdealGas, 2>>().unwrap().to_string();

            let x: Vec<f64> = first.split_whitespace().map(|t| t.parse().unwrap()).collect();
            let y: Vec<f64> = second.split_whitespace().map(|t| t.parse().unwrap()).collect();
            assert_eq!(x.len(), y.len());
            for (u, v) in x.iter().zip(&y) {
                assert_relative_eq!(*u, *v, max_relative = 1e-9, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn type_name_wraps_equation_of_state() {
        assert_eq!(HPolynomial::<IdealGas, 4>::type_name(), "hPolynomial<idealGas>");
    }

    #[test]
    fn text_roundtrip() {
        let th = thermo(gas(18.015), -1.342e7, 10_480.0, [1800.0, 0.3, 1.0e-4]);

        let first = th.to_string();
        let second = first.parse::<HPolynomial<IdealGas, 3>>().unwrap().to_string();

        let a: Vec<f64> = first.split_whitespace().map(|t| t.parse().unwrap()).collect();
        let b: Vec<f64> = second.split_whitespace().map(|t| t.parse().unwrap()).collect();
        assert_eq!(a.len(), 4 + 2 + 3);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_relative_eq!(*x, *y, max_relative = 1e-12);
        }
    }

    #[test]
    fn text_reads_fields_in_order() {
        let th: HPolynomial<IdealGas, 2> = "1 28.0134 200 3000 0 6840 1000 2".parse().unwrap();
        assert_relative_eq!(th.mass_specific_cp_coeffs()[0], 1000.0, max_relative = 1e-12);
        assert_relative_eq!(th.mass_specific_cp_coeffs()[1], 2.0, max_relative = 1e-12);
        assert_relative_eq!(
            th.standard_entropy().get::<joule_per_kelvin_mole>(),
            6840.0 * W_N2 / 1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn text_rejects_malformed_input() {
        for text in [
            "1 28.0134 200 3000 0 6840 1000",
            "1 28.0134 200 3000 0 entropy 1000 2",
            "1 28.0134 200 3000 0 6840 1000 2 7",
            "1 0 200 3000 0 6840 1000 2",
            "",
        ] {
            assert!(
                matches!(
                    text.parse::<HPolynomial<IdealGas, 2>>(),
                    Err(ThermoError::MalformedInput { .. })
                ),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn record_roundtrip_and_coefficient_count() {
        let th = thermo(gas(W_N2), 0.0, 6840.0, [1000.0, 0.2, -1.0e-5]);
        let record = th.to_record();
        assert_eq!(record.cp_coeffs.len(), 3);

        let back = HPolynomial::<IdealGas, 3>::from_record(gas(W_N2), &record).unwrap();
        assert_relative_eq!(
            back.cp(p(), temp(900.0)).get::<joule_per_kelvin_mole>(),
            th.cp(p(), temp(900.0)).get::<joule_per_kelvin_mole>(),
            max_relative = 1e-12
        );

        let err = HPolynomial::<IdealGas, 4>::from_record(gas(W_N2), &record).unwrap_err();
        assert!(matches!(err, ThermoError::MalformedInput { .. }));
    }

    fn cp_coeffs() -> impl Strategy<Value = [f64; 4]> {
        (500.0_f64..2000.0, -1.0_f64..1.0, -1.0e-3_f64..1.0e-3, -1.0e-7_f64..1.0e-7)
            .prop_map(|(a, b, c, d)| [a, b, c, d])
    }

    proptest! {
        #[test]
        fn derived_coefficients_stay_consistent(cp in cp_coeffs(), t in 250.0_f64..2500.0) {
            let th = thermo(gas(W_N2), 0.0, 0.0, cp);
            let t_std = standard::TEMPERATURE_K;

            prop_assert_eq!(th.h_coeffs().evaluate(t_std), 0.0);
            prop_assert!(th.s_coeffs().evaluate(t_std).abs() < 1e-9);

            let h = 1e-3;
            let cp_t = th.cp_coeffs().evaluate(t);

            let dh = (th.h_coeffs().evaluate(t + h) - th.h_coeffs().evaluate(t - h)) / (2.0 * h);
            prop_assert!((dh - cp_t).abs() <= 1e-6 * cp_t.abs().max(1.0));

            let ds = (th.s_coeffs().evaluate(t + h) - th.s_coeffs().evaluate(t - h)) / (2.0 * h);
            prop_assert!((ds - cp_t / t).abs() <= 1e-6 * (cp_t / t).abs().max(1.0));
        }
    }
}
