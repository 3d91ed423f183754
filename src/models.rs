//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Each one wraps the
//! thermo core in [`crate::support::thermo`] behind a [`twine_core::Model`]
//! implementation.
//!
//! # Model structure
//!
//! The [`twine_core::Model`] implementation should be a thin adapter that
//! delegates to the core API. A single core may be exposed through multiple
//! adapters (e.g., different wrapper types implementing `Model`).

pub mod thermo;
