//! Damage-radius assembly for ground impacts and airbursts.
//!
//! Two families of rings are produced and merged into one keyed map:
//! - crater-multiple rings, scaled off the physical crater rim, and
//! - overpressure rings at standard psi thresholds from the scaled-distance
//!   curve in [`overpressure`].
//!
//! Airbursts leave no crater, so they carry only the overpressure family.
//! Ground impacts carry both; where the families ever disagree on a key,
//! the overpressure value wins.

pub mod overpressure;

#[cfg(test)]
mod proptest_blast;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blast::overpressure::radius_for_overpressure;

/// Wire keys for the damage-radius map.
pub mod keys {
    /// Physical crater rim.
    pub const CRATER_RADIUS: &str = "crater_radius_m";
    /// Total destruction of ordinary structures.
    pub const SEVERE_DAMAGE: &str = "severe_damage_m";
    /// Heavy structural damage, widespread casualties.
    pub const MODERATE_DAMAGE: &str = "moderate_damage_m";
    /// Spontaneous ignition of flammable materials.
    pub const THERMAL_IGNITION: &str = "thermal_ignition_m";
    /// Broken windows, light structural damage.
    pub const LIGHT_DAMAGE: &str = "light_damage_m";
    /// 100 psi peak overpressure (total destruction).
    pub const R_100_PSI: &str = "R_100psi_m";
    /// 20 psi peak overpressure (reinforced structures fail).
    pub const R_20_PSI: &str = "R_20psi_m";
    /// 5 psi peak overpressure (residential collapse).
    pub const R_5_PSI: &str = "R_5psi_m";
    /// 1 psi peak overpressure (window breakage).
    pub const R_1_PSI: &str = "R_1psi_m";
    /// 0.5 psi peak overpressure (outer damage limit).
    pub const R_0_5_PSI: &str = "R_0_5psi_m";
}

/// Severe structural damage extends to this many crater radii.
pub const SEVERE_DAMAGE_MULTIPLIER: f64 = 3.0;
/// Moderate structural damage extends to this many crater radii.
pub const MODERATE_DAMAGE_MULTIPLIER: f64 = 8.0;
/// Thermal ignition extends to this many crater radii.
pub const THERMAL_IGNITION_MULTIPLIER: f64 = 12.0;
/// Light damage extends to this many crater radii.
pub const LIGHT_DAMAGE_MULTIPLIER: f64 = 20.0;

/// Standard psi thresholds reported for every event, paired with their keys.
const STANDARD_OVERPRESSURE_LEVELS: [(&str, f64); 5] = [
    (keys::R_100_PSI, 100.0),
    (keys::R_20_PSI, 20.0),
    (keys::R_5_PSI, 5.0),
    (keys::R_1_PSI, 1.0),
    (keys::R_0_5_PSI, 0.5),
];

/// Named damage rings in meters, keyed by the constants in [`keys`].
///
/// Backed by a `BTreeMap` so serialized output has a stable key order.
/// Serializes transparently as a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DamageRadii(pub BTreeMap<String, f64>);

impl DamageRadii {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: &str, radius_m: f64) {
        self.0.insert(key.to_string(), radius_m);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Merge `other` into `self`, with `other` winning on shared keys.
    pub fn merge_from(&mut self, other: DamageRadii) {
        self.0.extend(other.0);
    }
}

/// Damage rings as fixed multiples of the crater rim radius.
pub fn crater_damage_radii(crater_diameter_m: f64) -> DamageRadii {
    let rim_radius_m = crater_diameter_m / 2.0;

    let mut radii = DamageRadii::new();
    radii.insert(keys::CRATER_RADIUS, rim_radius_m);
    radii.insert(keys::SEVERE_DAMAGE, SEVERE_DAMAGE_MULTIPLIER * rim_radius_m);
    radii.insert(
        keys::MODERATE_DAMAGE,
        MODERATE_DAMAGE_MULTIPLIER * rim_radius_m,
    );
    radii.insert(
        keys::THERMAL_IGNITION,
        THERMAL_IGNITION_MULTIPLIER * rim_radius_m,
    );
    radii.insert(keys::LIGHT_DAMAGE, LIGHT_DAMAGE_MULTIPLIER * rim_radius_m);
    radii
}

/// Damage rings at the standard overpressure thresholds for a given yield.
pub fn overpressure_radii(yield_megatons: f64) -> DamageRadii {
    let mut radii = DamageRadii::new();
    for (key, psi) in STANDARD_OVERPRESSURE_LEVELS {
        radii.insert(key, radius_for_overpressure(psi, yield_megatons));
    }
    radii
}

/// Full damage-radius map for an event.
///
/// Airbursts report overpressure rings only; ground impacts report both
/// families, overpressure values taking precedence on any shared key.
pub fn damage_radii(is_airburst: bool, crater_diameter_m: f64, yield_megatons: f64) -> DamageRadii {
    let from_overpressure = overpressure_radii(yield_megatons);
    if is_airburst {
        return from_overpressure;
    }

    let mut radii = crater_damage_radii(crater_diameter_m);
    radii.merge_from(from_overpressure);
    radii
}
