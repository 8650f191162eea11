//! Basic impact kinematics: mass, kinetic energy, TNT equivalence, and the
//! seismic-equivalent magnitude of the released energy.
//!
//! All functions here are pure formulas over scalars and trust their inputs;
//! range validation belongs to [`ImpactorParameters`](crate::types::ImpactorParameters).

use serde::{Deserialize, Serialize};

use crate::types::{ImpactorParameters, joules_to_megatons};

/// Offset term of the Gutenberg-Richter energy/magnitude relation.
const MAGNITUDE_ENERGY_OFFSET: f64 = 4.8;

/// Slope term of the Gutenberg-Richter energy/magnitude relation.
const MAGNITUDE_ENERGY_SLOPE: f64 = 1.5;

/// Mass of a spherical impactor from its diameter and bulk density.
///
/// m = (4/3)·π·(d/2)³·ρ
///
/// # Arguments
/// * `diameter_m` - Diameter in meters
/// * `density_kg_m3` - Bulk density in kg/m³
#[inline]
pub fn mass_from_diameter(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3) * density_kg_m3
}

/// Kinetic energy of a moving mass, E = ½·m·v².
#[inline]
pub fn kinetic_energy(mass_kg: f64, velocity_m_s: f64) -> f64 {
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// Impact energy in Joules straight from bulk properties.
///
/// Composes [`mass_from_diameter`] and [`kinetic_energy`].
#[inline]
pub fn impact_energy(diameter_m: f64, velocity_m_s: f64, density_kg_m3: f64) -> f64 {
    kinetic_energy(mass_from_diameter(diameter_m, density_kg_m3), velocity_m_s)
}

/// Seismic-equivalent magnitude for a released energy.
///
/// M = (log₁₀(E) − 4.8) / 1.5, the Gutenberg-Richter relation applied to the
/// impact energy as if it were fully coupled into the ground. Undefined for
/// non-positive energy. Small energies legitimately produce negative
/// magnitudes; no floor is applied here — rounding up for display is a
/// presentation choice, not physics.
///
/// # Returns
/// `None` when `energy_joules` ≤ 0.
#[inline]
pub fn energy_to_magnitude(energy_joules: f64) -> Option<f64> {
    if energy_joules <= 0.0 {
        return None;
    }
    Some((energy_joules.log10() - MAGNITUDE_ENERGY_OFFSET) / MAGNITUDE_ENERGY_SLOPE)
}

/// Estimate a diameter in meters from an absolute (H) magnitude.
///
/// D_km = 1329 / √albedo · 10^(−H/5)
///
/// The standard photometric size estimate used for near-Earth objects whose
/// physical diameter has never been measured directly.
#[inline]
pub fn diameter_from_magnitude(h_magnitude: f64, albedo: f64) -> f64 {
    let d_km = 1329.0 * 10f64.powf(-h_magnitude / 5.0) / albedo.sqrt();
    d_km * 1000.0
}

/// [`diameter_from_magnitude`] with the conventional 0.15 albedo assumption.
#[inline]
pub fn diameter_from_magnitude_default_albedo(h_magnitude: f64) -> f64 {
    diameter_from_magnitude(h_magnitude, 0.15)
}

/// Energy bookkeeping for one impactor: mass, kinetic energy, and the derived
/// TNT/seismic equivalents.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ImpactEnergy {
    /// Impactor mass (kg)
    pub mass_kg: f64,
    /// Kinetic energy (J)
    pub energy_joules: f64,
    /// Kinetic energy (megatons TNT)
    pub energy_megatons: f64,
    /// Seismic-equivalent magnitude; absent for non-positive energy
    pub eq_magnitude: Option<f64>,
}

impl ImpactEnergy {
    /// Evaluate mass and energy for the given bulk properties.
    pub fn evaluate(diameter_m: f64, velocity_m_s: f64, density_kg_m3: f64) -> Self {
        let mass_kg = mass_from_diameter(diameter_m, density_kg_m3);
        let energy_joules = kinetic_energy(mass_kg, velocity_m_s);
        Self {
            mass_kg,
            energy_joules,
            energy_megatons: joules_to_megatons(energy_joules),
            eq_magnitude: energy_to_magnitude(energy_joules),
        }
    }

    /// Evaluate for a validated parameter set.
    pub fn from_impactor(params: &ImpactorParameters) -> Self {
        Self::evaluate(params.diameter_m, params.velocity_m_s, params.density_kg_m3)
    }
}
