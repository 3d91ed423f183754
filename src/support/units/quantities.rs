use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{MolarEnergy, MolarHeatCapacity},
    },
    typenum::{N1, N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Molar enthalpy, J/mol in SI.
pub type MolarEnthalpy = MolarEnergy;

/// Molar entropy, J/mol·K in SI.
pub type MolarEntropy = MolarHeatCapacity;

/// Molar internal energy, J/mol in SI.
pub type MolarInternalEnergy = MolarEnergy;
