//! Downstream consequence estimates layered on the damage rings.
//!
//! Everything here is a deterministic linear transform of the rings in
//! [`crate::blast`] plus two caller-supplied facts about the target: region
//! class and population density. The multipliers are a fixed calibration for
//! an educational scale of severity, not a validated hazard model.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::blast::{DamageRadii, keys};
use crate::effects::ImpactEffects;
use crate::types::ImpactRegion;

/// Tsunami reach per cube-root megaton, in meters (Ward & Asphaug style
/// cube-root yield scaling).
pub const TSUNAMI_RADIUS_COEFF_M: f64 = 20_000.0;

/// Population density assumed when the caller supplies none (people per km²).
pub const DEFAULT_POPULATION_DENSITY: f64 = 100.0;

/// Economic-disruption reach as a multiple of the 1 psi ring.
pub const ECONOMIC_RADIUS_MULTIPLIER: f64 = 2.5;
/// Environmental-disruption reach as a multiple of the 1 psi ring.
pub const ENVIRONMENTAL_RADIUS_MULTIPLIER: f64 = 4.0;
/// Health-system-strain reach as a multiple of the 1 psi ring.
pub const HEALTH_RADIUS_MULTIPLIER: f64 = 1.5;
/// Governance-disruption reach as a multiple of the 1 psi ring.
pub const GOVERNANCE_RADIUS_MULTIPLIER: f64 = 1.0;

/// Fraction of structures destroyed inside the blast zone.
pub const BLAST_ZONE_DAMAGE_FRACTION: f64 = 0.9;
/// Fraction of structures destroyed inside the thermal zone.
pub const THERMAL_ZONE_DAMAGE_FRACTION: f64 = 0.45;
/// Fraction of structures destroyed inside the seismic zone.
pub const SEISMIC_ZONE_DAMAGE_FRACTION: f64 = 0.1;

/// How strongly indirect effects propagate per region class.
fn region_exposure_factor(region: ImpactRegion) -> f64 {
    match region {
        ImpactRegion::Land => 1.0,
        ImpactRegion::Ocean => 0.6,
        ImpactRegion::Urban => 1.4,
        ImpactRegion::Rural => 0.8,
    }
}

/// Fraction of the exposed population lost inside the blast ring.
fn region_lethality(region: ImpactRegion) -> f64 {
    match region {
        ImpactRegion::Land => 0.3,
        ImpactRegion::Ocean => 0.05,
        ImpactRegion::Urban => 0.5,
        ImpactRegion::Rural => 0.1,
    }
}

/// Tsunami reach for an ocean impact: 20 000 · W^(1/3) meters.
///
/// Zero for non-positive yields.
#[inline]
pub fn tsunami_radius(energy_megatons: f64) -> f64 {
    if energy_megatons <= 0.0 {
        return 0.0;
    }
    TSUNAMI_RADIUS_COEFF_M * energy_megatons.cbrt()
}

/// Reach of second-order disruption, per societal dimension.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct IndirectEffects {
    pub economic_radius_m: f64,
    pub environmental_radius_m: f64,
    pub health_radius_m: f64,
    pub governance_radius_m: f64,
}

/// Indirect-effect radii: fixed multiples of the 1 psi ring, scaled by the
/// region's exposure factor. A map without a 1 psi ring yields all zeros.
pub fn indirect_effects(radii: &DamageRadii, region: ImpactRegion) -> IndirectEffects {
    let base_m = radii.get(keys::R_1_PSI).unwrap_or(0.0);
    let factor = region_exposure_factor(region);

    IndirectEffects {
        economic_radius_m: ECONOMIC_RADIUS_MULTIPLIER * base_m * factor,
        environmental_radius_m: ENVIRONMENTAL_RADIUS_MULTIPLIER * base_m * factor,
        health_radius_m: HEALTH_RADIUS_MULTIPLIER * base_m * factor,
        governance_radius_m: GOVERNANCE_RADIUS_MULTIPLIER * base_m * factor,
    }
}

/// Expected fatalities inside the blast ring.
///
/// Area times density times a per-region lethality fraction, rounded to a
/// whole count.
pub fn estimated_casualties(
    blast_radius_m: f64,
    population_density_per_km2: f64,
    region: ImpactRegion,
) -> u64 {
    let radius_km = blast_radius_m / 1000.0;
    let area_km2 = PI * radius_km * radius_km;
    (area_km2 * population_density_per_km2 * region_lethality(region)).round() as u64
}

/// One concentric infrastructure-damage zone.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DamageZone {
    pub radius_m: f64,
    pub area_km2: f64,
    /// Fraction of structures destroyed inside this zone.
    pub damage_fraction: f64,
}

impl DamageZone {
    fn new(radius_m: f64, damage_fraction: f64) -> Self {
        let radius_km = radius_m / 1000.0;
        Self {
            radius_m,
            area_km2: PI * radius_km * radius_km,
            damage_fraction,
        }
    }
}

/// The three infrastructure zones, innermost first.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct InfrastructureDamage {
    pub blast_zone: DamageZone,
    pub thermal_zone: DamageZone,
    pub seismic_zone: DamageZone,
}

/// Infrastructure zones from the three driving radii.
pub fn infrastructure_damage(
    blast_radius_m: f64,
    thermal_radius_m: f64,
    seismic_radius_m: f64,
) -> InfrastructureDamage {
    InfrastructureDamage {
        blast_zone: DamageZone::new(blast_radius_m, BLAST_ZONE_DAMAGE_FRACTION),
        thermal_zone: DamageZone::new(thermal_radius_m, THERMAL_ZONE_DAMAGE_FRACTION),
        seismic_zone: DamageZone::new(seismic_radius_m, SEISMIC_ZONE_DAMAGE_FRACTION),
    }
}

/// Consequence report for one computed impact.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ConsequenceAssessment {
    pub region: ImpactRegion,
    pub population_density_per_km2: f64,
    /// Reported for ocean impacts only.
    pub tsunami_radius_m: Option<f64>,
    pub indirect: IndirectEffects,
    pub estimated_casualties: u64,
    pub infrastructure: InfrastructureDamage,
}

impl ConsequenceAssessment {
    /// Assemble the consequence report for a computed impact.
    ///
    /// Driving radii come from the damage-ring map where present: blast from
    /// the 5 psi ring, thermal from the thermal-ignition ring, seismic from
    /// the light-damage ring. Missing rings fall back to crater-diameter
    /// multiples (3, 12, 20) — an airburst has no crater, so its thermal and
    /// seismic zones collapse to zero radius.
    pub fn from_effects(
        effects: &ImpactEffects,
        region: ImpactRegion,
        population_density_per_km2: f64,
    ) -> Self {
        let tsunami_radius_m = match region {
            ImpactRegion::Ocean => Some(tsunami_radius(effects.basic.energy_megatons)),
            _ => None,
        };

        let blast_radius_m = effects
            .radii_m
            .get(keys::R_5_PSI)
            .unwrap_or(effects.crater.diameter_m * 3.0);
        let thermal_radius_m = effects
            .radii_m
            .get(keys::THERMAL_IGNITION)
            .unwrap_or(effects.crater.diameter_m * 12.0);
        let seismic_radius_m = effects
            .radii_m
            .get(keys::LIGHT_DAMAGE)
            .unwrap_or(effects.crater.diameter_m * 20.0);

        Self {
            region,
            population_density_per_km2,
            tsunami_radius_m,
            indirect: indirect_effects(&effects.radii_m, region),
            estimated_casualties: estimated_casualties(
                blast_radius_m,
                population_density_per_km2,
                region,
            ),
            infrastructure: infrastructure_damage(blast_radius_m, thermal_radius_m, seismic_radius_m),
        }
    }

    /// [`Self::from_effects`] with the default population density.
    pub fn from_effects_default_density(effects: &ImpactEffects, region: ImpactRegion) -> Self {
        Self::from_effects(effects, region, DEFAULT_POPULATION_DENSITY)
    }
}
