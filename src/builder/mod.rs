//! Builder API for configuring engines.
//!
//! Configuration is expressed through a fluent builder rather than a file:
//! seed guests and an optional bound on undo history.

pub mod error;
pub mod gala;

pub use error::BuildError;
pub use gala::GalaBuilder;
