//! Pre-aggregated analytics records served under `/dashboard/*`.

use super::{Id, MissionStatus};
use crate::metrics::cost::CostFactors;
use crate::utils::lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchSuccessRate {
    #[serde(deserialize_with = "lenient::string")]
    pub organization: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_launches: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub successful: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub failed: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub other: i64,
    #[serde(deserialize_with = "lenient::f64")]
    pub success_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketPayload {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::f64")]
    pub payload_capacity: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub mass: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub height: f64,
    #[serde(deserialize_with = "lenient::i64")]
    pub stages: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub organization: String,
    #[serde(deserialize_with = "lenient::f64")]
    pub mass_to_payload_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRocket {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::f64")]
    pub payload_capacity: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub mass: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSatellite {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::f64")]
    pub mass: f64,
    #[serde(deserialize_with = "lenient::string")]
    pub purpose: String,
}

/// Selectable rockets, satellites and the pricing factors for the cost estimator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostEstimatorInputs {
    #[serde(deserialize_with = "lenient::null_default")]
    pub rockets: Vec<CostRocket>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub satellites: Vec<CostSatellite>,
    pub cost_factors: CostFactors,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanSpaceMission {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub status: MissionStatus,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::i64")]
    pub astronaut_count: i64,
    pub duration_days: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NationalityCount {
    #[serde(deserialize_with = "lenient::string")]
    pub nationality: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCount {
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopAstronaut {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub nationality: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub mission_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstronautStats {
    #[serde(deserialize_with = "lenient::null_default")]
    pub nationality_distribution: Vec<NationalityCount>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub status_distribution: Vec<StatusCount>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub top_astronauts: Vec<TopAstronaut>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchTrend {
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub total: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub successful: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub failed: i64,
    #[serde(deserialize_with = "lenient::f64")]
    pub success_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationPerformance {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub rocket_count: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub satellite_count: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub launch_count: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub successful_launches: i64,
    #[serde(deserialize_with = "lenient::f64")]
    pub success_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionProgress {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub status: MissionStatus,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::f64")]
    pub milestone_progress: f64,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_milestones: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub completed_milestones: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_objectives: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub primary_objectives: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub crew_assigned: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_crew_positions: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionTimelineEntry {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub status: MissionStatus,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub organization_names: Vec<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub astronaut_count: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub milestone_count: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub completed_milestones: i64,
    pub duration_days: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitCategory {
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitTypeShare {
    #[serde(deserialize_with = "lenient::string")]
    pub orbit_type: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub count: i64,
    #[serde(deserialize_with = "lenient::f64")]
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitDistribution {
    #[serde(deserialize_with = "lenient::null_default")]
    pub categorized: Vec<OrbitCategory>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub detailed: Vec<OrbitTypeShare>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_satellites: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyOrganization {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedMission {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub relation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionFamilyNode {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub status: MissionStatus,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub organizations: Vec<FamilyOrganization>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub rockets: Vec<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub satellites: Vec<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub milestone_count: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub completed_milestones: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub related_missions: Vec<RelatedMission>,
}

/// Headline counters shown above the analytics charts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverviewMetrics {
    pub total_rockets: usize,
    pub human_missions: usize,
    pub organizations: usize,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_satellites: i64,
}

/// Everything the analytics page renders, fetched as one unit
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    #[serde(deserialize_with = "lenient::null_default")]
    pub launch_success_rates: Vec<LaunchSuccessRate>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub top_rockets_by_payload: Vec<RocketPayload>,
    pub cost_estimator: Option<CostEstimatorInputs>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub human_space_missions: Vec<HumanSpaceMission>,
    pub astronaut_statistics: Option<AstronautStats>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub launch_trends: Vec<LaunchTrend>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub organization_performance: Vec<OrganizationPerformance>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub mission_progress: Vec<MissionProgress>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub mission_timeline: Vec<MissionTimelineEntry>,
    pub orbit_distribution: Option<OrbitDistribution>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub mission_family_tree: Vec<MissionFamilyNode>,
}

impl AnalyticsSnapshot {
    pub fn overview(&self) -> OverviewMetrics {
        OverviewMetrics {
            total_rockets: self.top_rockets_by_payload.len(),
            human_missions: self.human_space_missions.len(),
            organizations: self.launch_success_rates.len(),
            total_satellites: self
                .orbit_distribution
                .as_ref()
                .map_or(0, |o| o.total_satellites),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overview_counts_come_from_each_section() {
        let snapshot = AnalyticsSnapshot {
            top_rockets_by_payload: vec![RocketPayload::default(); 3],
            human_space_missions: vec![HumanSpaceMission::default(); 2],
            launch_success_rates: vec![LaunchSuccessRate::default(); 5],
            orbit_distribution: Some(OrbitDistribution {
                total_satellites: 42,
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            snapshot.overview(),
            OverviewMetrics {
                total_rockets: 3,
                human_missions: 2,
                organizations: 5,
                total_satellites: 42,
            }
        );
    }

    #[test]
    fn overview_of_empty_snapshot_is_zero() {
        assert_eq!(AnalyticsSnapshot::default().overview(), OverviewMetrics::default());
    }

    #[test]
    fn cost_inputs_read_short_factor_names() {
        let inputs: CostEstimatorInputs = serde_json::from_value(json!({
            "rockets": [{"id": 1, "name": "Falcon 9", "payload_capacity": "22800.0", "mass": 549054}],
            "satellites": [{"id": 2, "name": "Hubble", "mass": 11110, "purpose": "Science"}],
            "cost_factors": {
                "rocket_cost_per_kg": 2700,
                "satellite_cost_per_kg": 50000,
                "launch_services": 1000,
                "insurance": 0.1,
                "contingency": 0.15
            }
        }))
        .unwrap();

        assert_eq!(inputs.rockets[0].payload_capacity, 22800.0);
        assert_eq!(inputs.cost_factors.insurance_rate, 0.1);
        assert_eq!(inputs.cost_factors.contingency_rate, 0.15);
    }
}
