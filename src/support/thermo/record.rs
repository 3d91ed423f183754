//! Structured configuration for thermo data.
//!
//! Records hold plain numbers in mass-specific SI units and are what species
//! databases are written in. A [`SpeciesRecord`] pairs an equation of state
//! record with an [`HPolynomialRecord`] under a species name; a JSON file
//! holds a list of them.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{ThermoError, capability::EquationOfState, model::HPolynomial};

/// Configuration record for the polynomial part of an [`HPolynomial`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HPolynomialRecord {
    /// Heat of formation in J/kg.
    #[serde(alias = "Hf")]
    pub hf: f64,
    /// Standard entropy in J/(kg·K).
    #[serde(alias = "Sf")]
    pub sf: f64,
    /// `cp` coefficients in J/(kg·K^(i+1)), ascending power order.
    #[serde(alias = "CpCoeffs")]
    pub cp_coeffs: Vec<f64>,
}

/// A named species: equation of state record plus thermodynamic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord<R> {
    pub name: String,
    pub equation_of_state: R,
    pub thermodynamics: HPolynomialRecord,
}

impl<R> SpeciesRecord<R> {
    /// Creates a new `SpeciesRecord`.
    pub fn new(
        name: impl Into<String>,
        equation_of_state: R,
        thermodynamics: HPolynomialRecord,
    ) -> Self {
        Self {
            name: name.into(),
            equation_of_state,
            thermodynamics,
        }
    }

    /// Reads a list of `SpeciesRecord`s from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::Io`] if the file cannot be opened and
    /// [`ThermoError::Json`] if its contents do not match the schema.
    pub fn from_json<P: AsRef<Path>>(file: P) -> Result<Vec<Self>, ThermoError>
    where
        R: DeserializeOwned,
    {
        Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }

    /// Reads a list of `SpeciesRecord`s from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::Json`] if the string does not match the schema.
    pub fn from_json_str(json: &str) -> Result<Vec<Self>, ThermoError>
    where
        R: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the thermo model this record describes.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::MalformedInput`] if either record holds invalid
    /// values or the coefficient count is not `N`.
    pub fn build<E, const N: usize>(&self) -> Result<HPolynomial<E, N>, ThermoError>
    where
        E: EquationOfState<Record = R>,
    {
        let eos = E::from_record(&self.equation_of_state)?;
        HPolynomial::from_record(eos, &self.thermodynamics).map_err(|error| match error {
            ThermoError::MalformedInput { context } => {
                ThermoError::malformed(format!("{}: {context}", self.name))
            }
            other => other,
        })
    }
}

impl<E: EquationOfState, const N: usize> HPolynomial<E, N> {
    /// Returns a named species record describing this model.
    #[must_use]
    pub fn to_species_record(&self, name: impl Into<String>) -> SpeciesRecord<E::Record> {
        SpeciesRecord::new(name, self.equation_of_state().to_record(), self.to_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use approx::assert_relative_eq;
    use uom::si::{molar_heat_capacity::joule_per_kelvin_mole, molar_mass::gram_per_mole};

    use crate::support::thermo::{
        capability::ThermoProperties,
        eos::{IdealGas, IdealGasRecord},
        standard,
    };

    const SPECIES: &str = r#"[
        {
            "name": "N2",
            "equation_of_state": { "molar_mass": 28.0134, "t_low": 200.0, "t_high": 3500.0 },
            "thermodynamics": { "hf": 0.0, "sf": 6839.91, "cp_coeffs": [979.0, 0.4179, -1.176e-3, 1.674e-6, -7.256e-10, 0.0, 0.0, 0.0] }
        },
        {
            "name": "O2",
            "equation_of_state": { "moles": 1.0, "molar_mass": 31.9988, "t_low": 200.0, "t_high": 3500.0 },
            "thermodynamics": { "Hf": 0.0, "Sf": 6411.0, "CpCoeffs": [834.8, 0.2929, -1.495e-4, 3.413e-7, -2.278e-10, 0.0, 0.0, 0.0] }
        }
    ]"#;

    #[test]
    fn reads_species_list() {
        let records = SpeciesRecord::<IdealGasRecord>::from_json_str(SPECIES).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "N2");
        assert_eq!(records[0].equation_of_state.moles, 1.0);
        assert_eq!(records[1].thermodynamics.sf, 6411.0);

        let n2: HPolynomial<IdealGas> = records[0].build().unwrap();
        assert_relative_eq!(
            n2.equation_of_state().molar_mass().get::<gram_per_mole>(),
            28.0134,
            max_relative = 1e-12
        );
        let cp = n2.cp(standard::pressure(), standard::temperature());
        assert!(cp.get::<joule_per_kelvin_mole>() > 0.0);
    }

    #[test]
    fn reads_species_file() {
        let path = std::env::temp_dir()
            .join(format!("polythermo-species-{}.json", std::process::id()));
        File::create(&path).unwrap().write_all(SPECIES.as_bytes()).unwrap();

        let records = SpeciesRecord::<IdealGasRecord>::from_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn reports_missing_file_and_bad_json() {
        let missing = SpeciesRecord::<IdealGasRecord>::from_json("/nonexistent/species.json");
        assert!(matches!(missing, Err(ThermoError::Io(_))));

        let bad = SpeciesRecord::<IdealGasRecord>::from_json_str(r#"[{ "name": "N2" }]"#);
        assert!(matches!(bad, Err(ThermoError::Json(_))));
    }

    #[test]
    fn wrong_coefficient_count_names_species() {
        let records = SpeciesRecord::<IdealGasRecord>::from_json_str(SPECIES).unwrap();
        let err = records[0].build::<IdealGas, 4>().unwrap_err();
        match err {
            ThermoError::MalformedInput { context } => assert!(context.starts_with("N2:")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn species_record_roundtrip() {
        let records = SpeciesRecord::<IdealGasRecord>::from_json_str(SPECIES).unwrap();
        let o2: HPolynomial<IdealGas> = records[1].build().unwrap();

        let json = serde_json::to_string(&[o2.to_species_record("O2")]).unwrap();
        let back = SpeciesRecord::<IdealGasRecord>::from_json_str(&json).unwrap();
        assert_eq!(back[0].name, "O2");

        let o2_back: HPolynomial<IdealGas> = back[0].build().unwrap();
        let t = standard::temperature();
        let p = standard::pressure();
        assert_relative_eq!(
            o2_back.cp(p, t).get::<joule_per_kelvin_mole>(),
            o2.cp(p, t).get::<joule_per_kelvin_mole>(),
            max_relative = 1e-12
        );
    }
}
