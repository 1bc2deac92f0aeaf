/// Domain models mirroring the space-data API records
use crate::metrics::{countdown, LaunchClock};
use crate::pagination::Pagination;
use crate::utils::lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod analytics;

pub type Id = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStatus {
    Scheduled,
    Completed,
    Failed,
    Delayed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl LaunchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchStatus::Scheduled => "scheduled",
            LaunchStatus::Completed => "completed",
            LaunchStatus::Failed => "failed",
            LaunchStatus::Delayed => "delayed",
            LaunchStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Ongoing,
    Planned,
    Completed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationKind {
    Government,
    Private,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationRef {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketRef {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    pub organization: Option<OrganizationRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SatelliteRef {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub purpose: String,
    pub organization: Option<OrganizationRef>,
}

/// Launch history entry embedded in rockets, satellites and organizations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchRef {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub status: LaunchStatus,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub launch_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRef {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Launch {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub launch_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::string")]
    pub launch_site: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub status: LaunchStatus,
    #[serde(deserialize_with = "lenient::string")]
    pub outcome: String,
    #[serde(deserialize_with = "lenient::string")]
    pub mission_objective: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub countdown_seconds: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub days_until_launch: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub is_upcoming: bool,
    #[serde(deserialize_with = "lenient::null_default")]
    pub is_past: bool,
    pub rocket: Option<RocketRef>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub satellites: Vec<SatelliteRef>,
}

impl Launch {
    /// Countdown while upcoming, outcome once the clock has run out
    pub fn clock(&self) -> LaunchClock {
        countdown(self.countdown_seconds)
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.rocket
            .as_ref()
            .and_then(|r| r.organization.as_ref())
            .map(|o| o.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rocket {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::f64")]
    pub mass: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub height: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub diameter: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub payload_capacity: f64,
    #[serde(deserialize_with = "lenient::i64")]
    pub stages: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub launch_count: i64,
    #[serde(deserialize_with = "lenient::f64")]
    pub success_rate: f64,
    pub image_url: Option<String>,
    pub organization: Option<OrganizationRef>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub launches: Vec<LaunchRef>,
}

impl Rocket {
    pub fn organization_name(&self) -> &str {
        self.organization.as_ref().map_or("", |o| o.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Satellite {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub purpose: String,
    #[serde(deserialize_with = "lenient::f64")]
    pub mass: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub height: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub width: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub depth: f64,
    #[serde(deserialize_with = "lenient::string")]
    pub orbit_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub launch_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::i64")]
    pub age_in_days: i64,
    pub image_url: Option<String>,
    pub organization: Option<OrganizationRef>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub launches: Vec<LaunchRef>,
}

impl Satellite {
    pub fn organization_name(&self) -> &str {
        self.organization.as_ref().map_or("", |o| o.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(rename = "type", deserialize_with = "lenient::null_default")]
    pub kind: OrganizationKind,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    pub founded_year: Option<i32>,
    #[serde(deserialize_with = "lenient::i64")]
    pub rocket_count: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub satellite_count: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub launch_count: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub rockets: Vec<AssetRef>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub satellites: Vec<AssetRef>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub launches: Vec<LaunchRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::string")]
    pub milestone_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Objective {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub objective_type: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub priority: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mission {
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
    pub organization: Option<OrganizationRef>,
    #[serde(rename = "mission_milestones", deserialize_with = "lenient::null_default")]
    pub milestones: Vec<Milestone>,
    #[serde(rename = "mission_objectives", deserialize_with = "lenient::null_default")]
    pub objectives: Vec<Objective>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsArticle {
    pub id: Id,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub source: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::opt_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "lenient::i64")]
    pub total_organizations: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_rockets: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_satellites: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_launches: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub upcoming_launches: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub recent_news: i64,
}

/// Landing page aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub stats: DashboardStats,
    #[serde(deserialize_with = "lenient::null_default")]
    pub upcoming_launches: Vec<Launch>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub recent_news: Vec<NewsArticle>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub featured_rockets: Vec<Rocket>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub featured_satellites: Vec<Satellite>,
}

/// One server-side page of launches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchPage {
    #[serde(deserialize_with = "lenient::null_default")]
    pub launches: Vec<Launch>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn launch_decodes_with_embedded_rocket() {
        let launch: Launch = serde_json::from_value(json!({
            "id": 7,
            "name": "Starlink 9-3",
            "launch_date": "2030-03-01T12:00:00.000Z",
            "launch_site": "SLC-40",
            "status": "scheduled",
            "countdown_seconds": 90061,
            "days_until_launch": 1,
            "is_upcoming": true,
            "rocket": {"id": 1, "name": "Falcon 9", "organization": {"id": 3, "name": "SpaceX"}},
            "satellites": [{"id": 11, "name": "Starlink", "purpose": "Communications"}]
        }))
        .unwrap();

        assert_eq!(launch.status, LaunchStatus::Scheduled);
        assert_eq!(launch.organization_name(), Some("SpaceX"));
        assert_eq!(launch.satellites.len(), 1);
        assert!(launch.launch_date.is_some());
        assert_eq!(launch.outcome, "");
    }

    #[test]
    fn unknown_statuses_fall_back() {
        let launch: Launch = serde_json::from_value(json!({"id": 1, "status": "scrubbed"})).unwrap();
        assert_eq!(launch.status, LaunchStatus::Unknown);

        let org: Organization =
            serde_json::from_value(json!({"id": 1, "type": "academic"})).unwrap();
        assert_eq!(org.kind, OrganizationKind::Other);

        let mission: Mission =
            serde_json::from_value(json!({"id": 1, "status": "ongoing"})).unwrap();
        assert_eq!(mission.status, MissionStatus::Ongoing);
    }

    #[test]
    fn rocket_accepts_decimal_strings_and_nulls() {
        let rocket: Rocket = serde_json::from_value(json!({
            "id": 2,
            "name": "Falcon Heavy",
            "description": null,
            "mass": "1420788.0",
            "payload_capacity": 63800,
            "stages": "2",
            "status": "active"
        }))
        .unwrap();

        assert_eq!(rocket.mass, 1420788.0);
        assert_eq!(rocket.payload_capacity, 63800.0);
        assert_eq!(rocket.stages, 2);
        assert_eq!(rocket.description, "");
        assert_eq!(rocket.organization_name(), "");
    }

    #[test]
    fn mission_reads_milestones_and_objectives() {
        let mission: Mission = serde_json::from_value(json!({
            "id": 4,
            "name": "Artemis II",
            "status": "planned",
            "start_date": "2026-04-01",
            "end_date": null,
            "mission_milestones": [{"id": 1, "name": "Launch", "milestone_type": "launch", "status": "pending"}],
            "mission_objectives": [{"id": 1, "name": "Crewed flyby", "priority": 1, "is_primary": true}]
        }))
        .unwrap();

        assert_eq!(mission.milestones.len(), 1);
        assert!(mission.objectives[0].is_primary);
        assert!(mission.start_date.is_some());
        assert!(mission.end_date.is_none());
    }

    #[test]
    fn organization_type_serializes_back_as_type() {
        let org = Organization {
            id: 1,
            name: "NASA".into(),
            kind: OrganizationKind::Government,
            ..Default::default()
        };
        let v = serde_json::to_value(&org).unwrap();
        assert_eq!(v["type"], "government");
    }
}
