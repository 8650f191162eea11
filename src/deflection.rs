//! Along-track deflection budgeting.
//!
//! First-order mission math: a velocity change applied `t` seconds before
//! encounter shifts the arrival point by roughly Δv·t along track. Good for
//! teaching scale intuition; mission planning needs full propagation.

use serde::Serialize;

use crate::error::{ImpactError, Result};
use crate::types::{EARTH_RADIUS_M, SECONDS_PER_YEAR};

/// Lead times used by the worked example table, in years.
const EXAMPLE_LEAD_YEARS: [u32; 3] = [1, 5, 10];

/// Delta-v needed to shift the arrival point by `shift_m` with `lead_time_s`
/// of warning: Δv = S / t.
///
/// # Returns
/// The required delta-v in m/s, or a domain error for a non-positive lead
/// time — there is no budget that deflects an asteroid already arriving.
pub fn required_delta_v(shift_m: f64, lead_time_s: f64) -> Result<f64> {
    if lead_time_s <= 0.0 {
        return Err(ImpactError::NonPositiveLeadTime(lead_time_s));
    }
    Ok(shift_m / lead_time_s)
}

/// Arrival-point shift produced by a delta-v applied `lead_time_s` early:
/// S = Δv · t.
#[inline]
pub fn shift_from_delta_v(delta_v_ms: f64, lead_time_s: f64) -> f64 {
    delta_v_ms * lead_time_s
}

/// One deflection budget: the shift, the warning time, and the delta-v that
/// connects them (shift = Δv × lead time).
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct DeflectionResult {
    pub shift_m: f64,
    pub lead_time_s: f64,
    pub delta_v_ms: f64,
}

impl DeflectionResult {
    /// Budget for a desired shift at a given lead time.
    pub fn for_shift(shift_m: f64, lead_time_s: f64) -> Result<Self> {
        let delta_v_ms = required_delta_v(shift_m, lead_time_s)?;
        Ok(Self {
            shift_m,
            lead_time_s,
            delta_v_ms,
        })
    }
}

/// One row of the worked example table, with the delta-v restated in the
/// units people actually quote (cm/s and mm/s).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DeflectionExample {
    pub scenario: String,
    pub shift_m: f64,
    pub lead_time_years: u32,
    pub delta_v_ms: f64,
    pub delta_v_cm_s: f64,
    pub delta_v_mm_s: f64,
}

/// Worked examples: shift by one Earth radius and by 100 km, each at 1, 5,
/// and 10 year lead times.
pub fn deflection_examples() -> Result<Vec<DeflectionExample>> {
    let targets = [("1 Earth radius", EARTH_RADIUS_M), ("100 km", 100_000.0)];

    let mut examples = Vec::with_capacity(targets.len() * EXAMPLE_LEAD_YEARS.len());
    for (label, shift_m) in targets {
        for years in EXAMPLE_LEAD_YEARS {
            let lead_time_s = f64::from(years) * SECONDS_PER_YEAR;
            let delta_v_ms = required_delta_v(shift_m, lead_time_s)?;
            examples.push(DeflectionExample {
                scenario: format!("Shift by {label} ({years} year lead)"),
                shift_m,
                lead_time_years: years,
                delta_v_ms,
                delta_v_cm_s: delta_v_ms * 100.0,
                delta_v_mm_s: delta_v_ms * 1000.0,
            });
        }
    }
    Ok(examples)
}
