//! Comprehensive impact-effects pipeline.
//!
//! [`ImpactEffects::compute`] is the one-call entry point: it validates the
//! impactor, then chains energy, atmospheric entry, cratering, and damage-ring
//! assembly into a single serializable record. Airburst classification gates
//! the back half of the chain — an impactor that fragments high enough leaves
//! no crater and reports overpressure rings only.

use serde::Serialize;
use tracing::debug;

use crate::atmosphere::AtmosphericOutcome;
use crate::blast::{DamageRadii, damage_radii};
use crate::crater::CraterGeometry;
use crate::error::Result;
use crate::kinematics::ImpactEnergy;
use crate::types::ImpactorParameters;

/// Full physics report for one impactor.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ImpactEffects {
    /// Input parameters, echoed back after validation.
    pub inputs: ImpactorParameters,
    /// Mass, kinetic energy, and equivalent seismic magnitude.
    pub basic: ImpactEnergy,
    /// Breakup altitude, airburst flag, and dynamic pressure at breakup.
    pub atmospheric: AtmosphericOutcome,
    /// Final crater geometry; zeroed for airbursts.
    pub crater: CraterGeometry,
    /// Named damage rings in meters.
    pub radii_m: DamageRadii,
}

impl ImpactEffects {
    /// Run the full pipeline for one impactor.
    ///
    /// # Arguments
    /// * `params` - Impactor parameters; validated before any physics runs
    ///
    /// # Returns
    /// The assembled record, or a domain error from validation or the
    /// atmospheric-entry model.
    pub fn compute(params: &ImpactorParameters) -> Result<Self> {
        params.validate()?;

        let basic = ImpactEnergy::from_impactor(params);
        let atmospheric = AtmosphericOutcome::evaluate(params.velocity_m_s, params.strength_pa)?;

        let crater = if atmospheric.is_airburst {
            CraterGeometry::zeroed()
        } else {
            CraterGeometry::from_impactor(params)
        };

        let radii_m = damage_radii(
            atmospheric.is_airburst,
            crater.diameter_m,
            basic.energy_megatons,
        );

        debug!(
            "impact effects: {:.0} m at {:.0} m/s -> {:.2} MT, {}, crater {:.0} m",
            params.diameter_m,
            params.velocity_m_s,
            basic.energy_megatons,
            if atmospheric.is_airburst {
                "airburst"
            } else {
                "ground impact"
            },
            crater.diameter_m
        );

        Ok(Self {
            inputs: *params,
            basic,
            atmospheric,
            crater,
            radii_m,
        })
    }

    /// Pipeline run with every input at its default.
    pub fn compute_default() -> Result<Self> {
        Self::compute(&ImpactorParameters::default())
    }
}
