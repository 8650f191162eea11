//! Crater scaling via Holsapple-style Pi-scaling.
//!
//! Produces final crater diameter and depth for a ground impact, including
//! the simple-to-complex morphology transition for kilometer-scale craters.
//!
//! # Reference
//! - Holsapple, K.A. (1993), Annual Review of Earth and Planetary Sciences
//! - Collins et al. (2005), Meteoritics & Planetary Science

use serde::{Deserialize, Serialize};

use crate::types::{G_EARTH, ImpactorParameters, RHO_TARGET_DEFAULT};

/// Crater diameter above which morphology turns complex (km).
const COMPLEXITY_THRESHOLD_KM: f64 = 2.0;

/// Diameter multiplier applied past the complexity threshold.
const COMPLEX_CRATER_FACTOR: f64 = 1.3;

/// Depth regime boundary (m): simple bowls below, flattened complex craters at
/// and above.
const DEPTH_REGIME_BOUNDARY_M: f64 = 2000.0;

/// Final crater diameter in meters, assuming crustal-rock target, Earth
/// gravity, and unit scaling constant.
///
/// See [`crater_diameter_scaled`] for the fully parameterized form.
#[inline]
pub fn crater_diameter(diameter_m: f64, velocity_m_s: f64, density_impactor: f64) -> f64 {
    crater_diameter_scaled(
        diameter_m,
        velocity_m_s,
        density_impactor,
        RHO_TARGET_DEFAULT,
        G_EARTH,
        1.0,
    )
}

/// Final crater diameter in meters from Pi-scaling.
///
/// D(km) = k · g^(−0.22) · (ρᵢ/ρₜ)^0.3 · d(km)^0.78 · v(km/s)^0.44
///
/// The formula works in km and km/s; inputs and output here are SI meters.
/// Diameters past 2 km get the ×1.3 complex-morphology correction. The
/// result is floored at zero.
///
/// # Arguments
/// * `diameter_m` - Projectile diameter (m)
/// * `velocity_m_s` - Impact velocity (m/s)
/// * `density_impactor` - Impactor bulk density (kg/m³)
/// * `density_target` - Target ground density (kg/m³)
/// * `gravity` - Surface gravity (m/s²)
/// * `k` - Empirical scaling constant
pub fn crater_diameter_scaled(
    diameter_m: f64,
    velocity_m_s: f64,
    density_impactor: f64,
    density_target: f64,
    gravity: f64,
    k: f64,
) -> f64 {
    let d_km = diameter_m / 1000.0;
    let v_km_s = velocity_m_s / 1000.0;

    let diameter_km = k
        * gravity.powf(-0.22)
        * (density_impactor / density_target).powf(0.3)
        * d_km.powf(0.78)
        * v_km_s.powf(0.44);

    let mut diameter = diameter_km * 1000.0;
    if diameter_km > COMPLEXITY_THRESHOLD_KM {
        diameter *= COMPLEX_CRATER_FACTOR;
    }

    diameter.max(0.0)
}

/// Crater depth from its final diameter.
///
/// Simple craters are bowl-shaped at roughly 1:5 depth-to-diameter; complex
/// craters (≥ 2000 m) collapse to a much flatter 1:10. The switch is a
/// deliberate discontinuity at the regime boundary, not a smooth blend.
#[inline]
pub fn crater_depth(crater_diameter_m: f64) -> f64 {
    if crater_diameter_m < DEPTH_REGIME_BOUNDARY_M {
        crater_diameter_m / 5.0
    } else {
        crater_diameter_m / 10.0
    }
}

/// Final crater dimensions for a ground impact.
///
/// All-zero for airbursts, where nothing coherent reaches the ground.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CraterGeometry {
    /// Final crater diameter (m)
    pub diameter_m: f64,
    /// Crater depth (m)
    pub depth_m: f64,
    /// Final crater radius (m)
    pub radius_m: f64,
}

impl CraterGeometry {
    /// Evaluate crater dimensions for the given bulk properties.
    pub fn evaluate(diameter_m: f64, velocity_m_s: f64, density_kg_m3: f64) -> Self {
        let crater_diameter_m = crater_diameter(diameter_m, velocity_m_s, density_kg_m3);
        Self {
            diameter_m: crater_diameter_m,
            depth_m: crater_depth(crater_diameter_m),
            radius_m: crater_diameter_m / 2.0,
        }
    }

    /// Evaluate for a validated parameter set.
    pub fn from_impactor(params: &ImpactorParameters) -> Self {
        Self::evaluate(params.diameter_m, params.velocity_m_s, params.density_kg_m3)
    }

    /// The all-zero geometry reported for airbursts.
    pub fn zeroed() -> Self {
        Self::default()
    }
}
