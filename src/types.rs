//! Physical constants, unit converters, and input parameter types.
//!
//! Everything downstream (kinematics, crater scaling, breakup, blast radii,
//! deflection, orbit propagation) works in SI units — meters, seconds,
//! kilograms, Joules, Pascals — except the orbit module, which follows the
//! astronomical convention of kilometers and km/s.

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, Result};

// Physical constants (SI units)

/// Standard Earth surface gravity (m/s²)
pub const G_EARTH: f64 = 9.80665;

/// Mean Earth radius (m)
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Sea-level air density (kg/m³)
pub const RHO_AIR_SEA_LEVEL: f64 = 1.225;

/// Exponential atmosphere scale height (m)
pub const ATMOSPHERE_SCALE_HEIGHT_M: f64 = 7640.0;

/// TNT equivalence: Joules per megaton
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// TNT equivalence: Joules per ton
pub const JOULES_PER_TON: f64 = 4.184e9;

/// Julian year in seconds
pub const SECONDS_PER_YEAR: f64 = 3.15576e7;

/// Default asteroid bulk density (kg/m³), typical stony composition
pub const RHO_ASTEROID_DEFAULT: f64 = 3000.0;

/// Default target (crustal rock) density (kg/m³)
pub const RHO_TARGET_DEFAULT: f64 = 2700.0;

/// Sun's standard gravitational parameter (km³/s²)
pub const GM_SUN_KM3_S2: f64 = 1.327e11;

/// Astronomical unit in kilometers
pub const AU_KM: f64 = 1.495978707e8;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Convert kinetic energy in Joules to megatons of TNT.
#[inline]
pub fn joules_to_megatons(energy_joules: f64) -> f64 {
    energy_joules / JOULES_PER_MEGATON
}

/// Convert megatons of TNT to Joules.
#[inline]
pub fn megatons_to_joules(energy_megatons: f64) -> f64 {
    energy_megatons * JOULES_PER_MEGATON
}

/// Convert kinetic energy in Joules to tons of TNT.
#[inline]
pub fn joules_to_tons(energy_joules: f64) -> f64 {
    energy_joules / JOULES_PER_TON
}

/// Broad surface category at the impact point.
///
/// Steers the downstream consequence estimators (tsunami reach, casualty
/// lethality, indirect-effect reach); it never feeds back into the physics.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImpactRegion {
    #[default]
    Land,
    Ocean,
    Urban,
    Rural,
}

/// Bulk properties of an incoming impactor.
///
/// This is the validated entry point for the whole impact pipeline: the leaf
/// physics functions trust their arguments, so range checking lives here, at
/// the boundary. A partially-populated JSON body deserializes to the
/// documented defaults (a 100 m stony asteroid at typical entry speed).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ImpactorParameters {
    /// Diameter (m, > 0)
    #[serde(default = "defaults::diameter_m")]
    pub diameter_m: f64,
    /// Entry velocity (m/s, > 0)
    #[serde(default = "defaults::velocity_m_s")]
    pub velocity_m_s: f64,
    /// Bulk density (kg/m³, > 0)
    #[serde(default = "defaults::density_kg_m3")]
    pub density_kg_m3: f64,
    /// Material strength (Pa, > 0)
    #[serde(default = "defaults::strength_pa")]
    pub strength_pa: f64,
    /// Entry angle from horizontal (degrees, [0, 90])
    #[serde(default = "defaults::impact_angle_deg")]
    pub impact_angle_deg: f64,
}

mod defaults {
    pub fn diameter_m() -> f64 {
        100.0
    }
    pub fn velocity_m_s() -> f64 {
        17000.0
    }
    pub fn density_kg_m3() -> f64 {
        2600.0
    }
    pub fn strength_pa() -> f64 {
        1e6
    }
    pub fn impact_angle_deg() -> f64 {
        45.0
    }
}

impl Default for ImpactorParameters {
    fn default() -> Self {
        Self {
            diameter_m: defaults::diameter_m(),
            velocity_m_s: defaults::velocity_m_s(),
            density_kg_m3: defaults::density_kg_m3(),
            strength_pa: defaults::strength_pa(),
            impact_angle_deg: defaults::impact_angle_deg(),
        }
    }
}

impl ImpactorParameters {
    /// Create a fully validated parameter set.
    ///
    /// # Errors
    /// Returns a domain error if any bulk property is non-positive or
    /// non-finite, or if the entry angle falls outside [0, 90] degrees.
    pub fn new(
        diameter_m: f64,
        velocity_m_s: f64,
        density_kg_m3: f64,
        strength_pa: f64,
        impact_angle_deg: f64,
    ) -> Result<Self> {
        let params = Self {
            diameter_m,
            velocity_m_s,
            density_kg_m3,
            strength_pa,
            impact_angle_deg,
        };
        params.validate()?;
        Ok(params)
    }

    /// Shorthand for the common case: diameter, velocity, and density, with
    /// default strength and entry angle.
    pub fn stony(diameter_m: f64, velocity_m_s: f64, density_kg_m3: f64) -> Result<Self> {
        Self::new(
            diameter_m,
            velocity_m_s,
            density_kg_m3,
            defaults::strength_pa(),
            defaults::impact_angle_deg(),
        )
    }

    /// Re-check the invariants, e.g. after deserializing caller-supplied JSON.
    pub fn validate(&self) -> Result<()> {
        require_positive("diameter_m", self.diameter_m)?;
        require_positive("velocity_m_s", self.velocity_m_s)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        require_positive("strength_pa", self.strength_pa)?;
        if !(0.0..=90.0).contains(&self.impact_angle_deg) {
            return Err(ImpactError::AngleOutOfRange(self.impact_angle_deg));
        }
        Ok(())
    }
}

/// Reject non-positive or non-finite values with the field name attached.
fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ImpactError::InvalidParameter { name, value })
    }
}
