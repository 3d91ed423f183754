//! Supporting utilities used by models.
//!
//! Everything here is public because it's useful on its own, but these APIs
//! are not yet stable.

pub mod constraint;
pub mod polynomial;
pub mod thermo;
pub mod tokens;
pub mod units;
