//! Crate-wide error type for domain validation.
//!
//! Every fallible operation in this crate fails for the same reason: an input
//! outside the physical domain of the formula it feeds. Valid-but-undefined
//! results (a quake magnitude for zero energy, a breakup altitude for a body
//! that reaches the ground intact) are `Option`s, not errors.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ImpactError>;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ImpactError {
    #[error("lead time must be positive, got {0} s")]
    NonPositiveLeadTime(f64),

    #[error("material strength must be positive and finite, got {0} Pa")]
    NonPositiveStrength(f64),

    #[error("{name} must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("entry angle must be within [0, 90] degrees, got {0}")]
    AngleOutOfRange(f64),

    #[error("semi-major axis must be positive, got {0} km")]
    NonPositiveSemiMajorAxis(f64),

    #[error("eccentricity must be within [0, 1) for a closed orbit, got {0}")]
    EccentricityOutOfRange(f64),
}
