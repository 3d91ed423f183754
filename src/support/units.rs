//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities at its API boundary.
//! This module gives thermodynamic names to quantities so signatures read in
//! thermodynamic terms:
//!
//! - mass-specific inputs: [`SpecificEnthalpy`] (J/kg), [`SpecificEntropy`] (J/kg·K)
//! - molar results: [`MolarEnthalpy`] and [`MolarInternalEnergy`] (J/mol,
//!   [`uom`]'s `MolarEnergy`), [`MolarEntropy`] (J/mol·K, [`uom`]'s
//!   `MolarHeatCapacity`)
//!
//! The aliases are plain [`uom::si::Quantity`] types, so they are constructed
//! and read with the units of the matching [`uom`] quantity:
//!
//! ```
//! use twine_polythermo::support::units::{MolarEnthalpy, MolarEntropy};
//! use uom::si::{molar_energy::kilojoule_per_mole, molar_heat_capacity::joule_per_kelvin_mole};
//!
//! let h = MolarEnthalpy::new::<kilojoule_per_mole>(-241.8);
//! let s = MolarEntropy::new::<joule_per_kelvin_mole>(188.8);
//! assert!(h.get::<kilojoule_per_mole>() < 0.0);
//! assert!(s.get::<joule_per_kelvin_mole>() > 0.0);
//! ```

mod quantities;

pub use quantities::{
    MolarEnthalpy, MolarEntropy, MolarInternalEnergy, SpecificEnthalpy, SpecificEntropy,
};
