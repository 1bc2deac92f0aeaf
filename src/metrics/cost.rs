//! Mission cost estimate for a rocket/satellite pairing.

use crate::domain::analytics::{CostEstimatorInputs, CostRocket, CostSatellite};
use crate::domain::Id;
use crate::utils::lenient;
use serde::{Deserialize, Serialize};

/// Pricing factors published by the cost estimator endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostFactors {
    #[serde(deserialize_with = "lenient::f64")]
    pub rocket_cost_per_kg: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub satellite_cost_per_kg: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub launch_services: f64,
    #[serde(rename = "insurance", alias = "insurance_rate", deserialize_with = "lenient::f64")]
    pub insurance_rate: f64,
    #[serde(
        rename = "contingency",
        alias = "contingency_rate",
        deserialize_with = "lenient::f64"
    )]
    pub contingency_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub rocket_cost: f64,
    pub satellite_cost: f64,
    pub launch_services_cost: f64,
    pub subtotal: f64,
    pub insurance_cost: f64,
    pub contingency_cost: f64,
    pub total: f64,
}

pub fn estimate_cost(payload_capacity: f64, satellite_mass: f64, factors: &CostFactors) -> CostBreakdown {
    let rocket_cost = payload_capacity * factors.rocket_cost_per_kg;
    let satellite_cost = satellite_mass * factors.satellite_cost_per_kg;
    let launch_services_cost = satellite_mass * factors.launch_services;

    let subtotal = rocket_cost + satellite_cost + launch_services_cost;
    let insurance_cost = subtotal * factors.insurance_rate;
    let contingency_cost = subtotal * factors.contingency_rate;

    CostBreakdown {
        rocket_cost,
        satellite_cost,
        launch_services_cost,
        subtotal,
        insurance_cost,
        contingency_cost,
        total: subtotal + insurance_cost + contingency_cost,
    }
}

/// Selection state for the estimator form.
///
/// Changing a selection never recomputes; only [`CostEstimator::calculate`] does.
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    inputs: CostEstimatorInputs,
    rocket: Option<Id>,
    satellite: Option<Id>,
    estimate: Option<CostBreakdown>,
}

impl CostEstimator {
    pub fn new(inputs: CostEstimatorInputs) -> Self {
        Self {
            inputs,
            ..Default::default()
        }
    }

    pub fn inputs(&self) -> &CostEstimatorInputs {
        &self.inputs
    }

    pub fn select_rocket(&mut self, id: Option<Id>) {
        self.rocket = id;
    }

    pub fn select_satellite(&mut self, id: Option<Id>) {
        self.satellite = id;
    }

    pub fn selected_rocket(&self) -> Option<&CostRocket> {
        let id = self.rocket?;
        self.inputs.rockets.iter().find(|r| r.id == id)
    }

    pub fn selected_satellite(&self) -> Option<&CostSatellite> {
        let id = self.satellite?;
        self.inputs.satellites.iter().find(|s| s.id == id)
    }

    /// Whether the calculate action has both selections it needs
    pub fn can_calculate(&self) -> bool {
        self.rocket.is_some() && self.satellite.is_some()
    }

    /// Run the estimate for the current selections.
    ///
    /// Returns `None` and leaves the last estimate untouched when either
    /// selection is missing or unknown.
    pub fn calculate(&mut self) -> Option<CostBreakdown> {
        let rocket = self.selected_rocket()?;
        let satellite = self.selected_satellite()?;
        let breakdown = estimate_cost(
            rocket.payload_capacity,
            satellite.mass,
            &self.inputs.cost_factors,
        );
        self.estimate = Some(breakdown);
        Some(breakdown)
    }

    pub fn estimate(&self) -> Option<&CostBreakdown> {
        self.estimate.as_ref()
    }
}
