//! Bolide - Asteroid Impact Physics Engine
//!
//! A library crate providing impact-energy, atmospheric-entry, cratering,
//! blast-damage, and Keplerian orbital-propagation components for
//! educational asteroid-threat simulation.

pub mod atmosphere;
pub mod blast;
pub mod consequences;
pub mod crater;
pub mod deflection;
pub mod effects;
pub mod error;
pub mod kinematics;
pub mod orbit;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use effects::ImpactEffects;
pub use error::{ImpactError, Result};
pub use types::{ImpactRegion, ImpactorParameters};
