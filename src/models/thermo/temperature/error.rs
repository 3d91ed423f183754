use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::units::MolarEnthalpy;

/// Errors that can occur while recovering temperature from enthalpy.
#[derive(Debug, Error)]
pub enum TemperatureSolveError {
    /// The target enthalpy is not reached anywhere in the valid range.
    #[error("enthalpy {target:?} outside [{min:?}, {max:?}]")]
    OutOfRange {
        target: MolarEnthalpy,
        /// Enthalpy at the low end of the valid range.
        min: MolarEnthalpy,
        /// Enthalpy at the high end of the valid range.
        max: MolarEnthalpy,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best enthalpy residual achieved.
        residual: MolarEnthalpy,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
