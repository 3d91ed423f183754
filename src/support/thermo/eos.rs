//! Equations of state that thermo models can be layered on.

pub mod ideal_gas;

pub use ideal_gas::{IdealGas, IdealGasRecord};
