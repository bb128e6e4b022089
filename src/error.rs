//! Error type shared by the simulation library

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be finite and strictly positive, otherwise the radius `m^0.25` is meaningless
    #[error("invalid mass {0}: mass must be finite and > 0")]
    InvalidMass(f64),

    #[error("particle position and velocity must be finite")]
    NonFiniteState,

    #[error("invalid bounds {width} x {height}: both extents must be finite and > 0")]
    InvalidBounds { width: f64, height: f64 },

    #[error("invalid mass range [{min}, {max}): need 0 < min < max")]
    InvalidMassRange { min: f64, max: f64 },
}
