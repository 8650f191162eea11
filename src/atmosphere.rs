//! Atmospheric entry: dynamic pressure and breakup altitude.
//!
//! Models the atmosphere as a single exponential density profile and asks
//! where ram pressure first exceeds the body's material strength. Outcomes:
//! - `Err` for a non-positive strength (the formula takes its logarithm),
//! - `Ok(None)` when even sea-level air cannot break the body (it reaches the
//!   ground intact),
//! - `Ok(Some(altitude))` otherwise, clamped to [0, 120 km].
//!
//! Whether a breakup counts as an airburst is a separate threshold question,
//! answered by [`is_airburst`].

use serde::Serialize;

use crate::error::{ImpactError, Result};
use crate::types::{ATMOSPHERE_SCALE_HEIGHT_M, RHO_AIR_SEA_LEVEL};

/// Breakup above this altitude counts as an airburst (m).
pub const AIRBURST_THRESHOLD_M: f64 = 10000.0;

/// Ceiling for reported breakup altitudes (m); the exponential-atmosphere fit
/// is meaningless past this and results are clamped, not extrapolated.
pub const MAX_BREAKUP_ALTITUDE_M: f64 = 120000.0;

/// Material strengths surveyed by [`breakup_survey`] (Pa).
const SURVEY_STRENGTHS_PA: [f64; 4] = [1e5, 1e6, 1e7, 1e8];

/// Ram (dynamic) pressure on a body moving at `velocity_m_s` through air at
/// the given altitude.
///
/// q = ½ · ρ₀ · exp(−z/H) · v²
#[inline]
pub fn dynamic_pressure(velocity_m_s: f64, altitude_m: f64) -> f64 {
    let rho = RHO_AIR_SEA_LEVEL * (-altitude_m / ATMOSPHERE_SCALE_HEIGHT_M).exp();
    0.5 * rho * velocity_m_s * velocity_m_s
}

/// Altitude at which ram pressure first matches the material strength.
///
/// Inverts q(z) = S for the exponential atmosphere:
/// z = −H · ln(2S / (v²·ρ₀)).
///
/// # Returns
/// * `Ok(Some(z))` - breakup at `z` meters, clamped to [0, 120000]
/// * `Ok(None)` - the required air density exceeds sea level; the body
///   reaches the ground intact and no breakup altitude exists
///
/// # Errors
/// Non-positive or non-finite strength is a domain error, never a NaN.
pub fn breakup_altitude(velocity_m_s: f64, strength_pa: f64) -> Result<Option<f64>> {
    if !strength_pa.is_finite() || strength_pa <= 0.0 {
        return Err(ImpactError::NonPositiveStrength(strength_pa));
    }

    let rho_needed = 2.0 * strength_pa / (velocity_m_s * velocity_m_s);
    if rho_needed > RHO_AIR_SEA_LEVEL {
        return Ok(None);
    }

    let z = -ATMOSPHERE_SCALE_HEIGHT_M * (rho_needed / RHO_AIR_SEA_LEVEL).ln();
    Ok(Some(z.clamp(0.0, MAX_BREAKUP_ALTITUDE_M)))
}

/// True iff a breakup altitude exists and lies above the airburst threshold.
#[inline]
pub fn is_airburst(breakup_altitude_m: Option<f64>) -> bool {
    is_airburst_above(breakup_altitude_m, AIRBURST_THRESHOLD_M)
}

/// [`is_airburst`] with a caller-chosen threshold.
#[inline]
pub fn is_airburst_above(breakup_altitude_m: Option<f64>, threshold_m: f64) -> bool {
    breakup_altitude_m.is_some_and(|z| z > threshold_m)
}

/// Qualitative material class for a strength value.
pub fn strength_description(strength_pa: f64) -> &'static str {
    if strength_pa < 5e5 {
        "Very weak rubble pile"
    } else if strength_pa < 1e6 {
        "Weak rubble pile"
    } else if strength_pa < 5e6 {
        "Porous rock"
    } else if strength_pa < 1e7 {
        "Fractured rock"
    } else if strength_pa < 5e7 {
        "Solid rock"
    } else {
        "Monolithic rock"
    }
}

/// Atmospheric entry outcome for one impactor.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct AtmosphericOutcome {
    /// Breakup altitude (m); absent when the body reaches the ground intact
    pub breakup_altitude_m: Option<f64>,
    /// Whether the breakup qualifies as an airburst
    pub is_airburst: bool,
    /// Dynamic pressure at the breakup altitude, or at ground level when
    /// there is none (Pa)
    pub dynamic_pressure_pa: f64,
}

impl AtmosphericOutcome {
    /// Evaluate the breakup model for one velocity/strength pair.
    ///
    /// # Errors
    /// Propagates the domain error for non-positive strength.
    pub fn evaluate(velocity_m_s: f64, strength_pa: f64) -> Result<Self> {
        let breakup_altitude_m = breakup_altitude(velocity_m_s, strength_pa)?;
        let dynamic_pressure_pa = dynamic_pressure(velocity_m_s, breakup_altitude_m.unwrap_or(0.0));
        Ok(Self {
            breakup_altitude_m,
            is_airburst: is_airburst(breakup_altitude_m),
            dynamic_pressure_pa,
        })
    }
}

/// One row of the canonical strength survey.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct BreakupExample {
    pub strength_pa: f64,
    pub strength_description: &'static str,
    /// Breakup altitude (m); absent when the body survives to the ground
    pub breakup_altitude_m: Option<f64>,
    /// Same altitude in km, for display
    pub breakup_altitude_km: Option<f64>,
    pub is_airburst: bool,
}

/// Breakup behavior across the canonical strength range (rubble pile through
/// monolithic rock) at a fixed entry velocity.
///
/// # Errors
/// Never in practice: every surveyed strength is positive and finite. The
/// `Result` is the per-row evaluation's, passed through.
pub fn breakup_survey(velocity_m_s: f64) -> Result<Vec<BreakupExample>> {
    SURVEY_STRENGTHS_PA
        .iter()
        .map(|&strength_pa| {
            let breakup_altitude_m = breakup_altitude(velocity_m_s, strength_pa)?;
            Ok(BreakupExample {
                strength_pa,
                strength_description: strength_description(strength_pa),
                breakup_altitude_m,
                breakup_altitude_km: breakup_altitude_m.map(|z| z / 1000.0),
                is_airburst: is_airburst(breakup_altitude_m),
            })
        })
        .collect()
}
