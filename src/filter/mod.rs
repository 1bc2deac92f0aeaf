//! Client-side filters over fetched collections.
//!
//! Every filter is a free-text term matched case-insensitively against a few
//! designated fields, AND-ed with exact equality on categorical fields. Unset
//! fields match everything. Filters are pure and rescan the whole slice.

use crate::domain::{
    Mission, MissionStatus, NewsArticle, Organization, OrganizationKind, Rocket, Satellite,
};
use crate::metrics::distinct_values;
use crate::utils::contains_ci;
use serde::de::value::StrDeserializer;
use serde::de::{Deserializer, IntoDeserializer};
use serde::{Deserialize, Serialize};

pub trait ItemFilter<T> {
    fn matches(&self, item: &T) -> bool;

    /// Matching items in source order
    fn apply<'a, I>(&self, items: I) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

fn any_field_contains(fields: &[&str], term: &str) -> bool {
    term.is_empty() || fields.iter().any(|f| contains_ci(f, term))
}

fn equals_if_set(selected: &Option<String>, actual: &str) -> bool {
    selected.as_deref().map_or(true, |s| s.is_empty() || s == actual)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RocketFilter {
    pub search: String,
    pub organization: Option<String>,
    pub status: Option<String>,
}

impl ItemFilter<Rocket> for RocketFilter {
    fn matches(&self, rocket: &Rocket) -> bool {
        any_field_contains(&[rocket.name.as_str(), rocket.organization_name()], &self.search)
            && equals_if_set(&self.organization, rocket.organization_name())
            && equals_if_set(&self.status, &rocket.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SatelliteFilter {
    pub search: String,
    pub organization: Option<String>,
    pub orbit_type: Option<String>,
    pub status: Option<String>,
}

impl ItemFilter<Satellite> for SatelliteFilter {
    fn matches(&self, sat: &Satellite) -> bool {
        any_field_contains(
            &[sat.name.as_str(), sat.organization_name(), sat.purpose.as_str()],
            &self.search,
        ) && equals_if_set(&self.organization, sat.organization_name())
            && equals_if_set(&self.orbit_type, &sat.orbit_type)
            && equals_if_set(&self.status, &sat.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrganizationFilter {
    pub search: String,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<OrganizationKind>,
}

impl ItemFilter<Organization> for OrganizationFilter {
    fn matches(&self, org: &Organization) -> bool {
        any_field_contains(&[org.name.as_str(), org.country.as_str()], &self.search)
            && equals_if_set(&self.country, &org.country)
            && self.kind.map_or(true, |k| k == org.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewsFilter {
    pub search: String,
    pub category: Option<String>,
    pub source: Option<String>,
}

impl ItemFilter<NewsArticle> for NewsFilter {
    fn matches(&self, article: &NewsArticle) -> bool {
        any_field_contains(
            &[
                article.title.as_str(),
                article.summary.as_str(),
                article.source.as_str(),
            ],
            &self.search,
        ) && equals_if_set(&self.category, &article.category)
            && equals_if_set(&self.source, &article.source)
    }
}

/// Status tab on the missions page; `None` is "all"
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MissionFilter {
    #[serde(deserialize_with = "status_tab")]
    pub status: Option<MissionStatus>,
}

/// Tab key: empty or `all` selects every mission
fn status_tab<'de, D>(deserializer: D) -> Result<Option<MissionStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let tab = Option::<String>::deserialize(deserializer)?;
    match tab.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(key) => {
            let key: StrDeserializer<'_, D::Error> = key.into_deserializer();
            MissionStatus::deserialize(key).map(Some)
        }
    }
}

impl ItemFilter<Mission> for MissionFilter {
    fn matches(&self, mission: &Mission) -> bool {
        self.status.map_or(true, |s| s == mission.status)
    }
}

/// Non-empty distinct values of a text field, in first-seen order
fn options_of<'a, T>(items: &'a [T], key: impl Fn(&'a T) -> &'a str) -> Vec<String> {
    distinct_values(items, key)
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Choices offered by the rocket filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RocketOptions {
    pub organizations: Vec<String>,
    pub statuses: Vec<String>,
}

impl RocketFilter {
    pub fn options(rockets: &[Rocket]) -> RocketOptions {
        RocketOptions {
            organizations: options_of(rockets, Rocket::organization_name),
            statuses: options_of(rockets, |r| r.status.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SatelliteOptions {
    pub organizations: Vec<String>,
    pub orbit_types: Vec<String>,
    pub statuses: Vec<String>,
}

impl SatelliteFilter {
    pub fn options(satellites: &[Satellite]) -> SatelliteOptions {
        SatelliteOptions {
            organizations: options_of(satellites, Satellite::organization_name),
            orbit_types: options_of(satellites, |s| s.orbit_type.as_str()),
            statuses: options_of(satellites, |s| s.status.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationOptions {
    pub countries: Vec<String>,
    pub types: Vec<OrganizationKind>,
}

impl OrganizationFilter {
    pub fn options(organizations: &[Organization]) -> OrganizationOptions {
        OrganizationOptions {
            countries: options_of(organizations, |o| o.country.as_str()),
            types: distinct_values(organizations, |o| o.kind),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsOptions {
    pub categories: Vec<String>,
    pub sources: Vec<String>,
}

impl NewsFilter {
    pub fn options(articles: &[NewsArticle]) -> NewsOptions {
        NewsOptions {
            categories: options_of(articles, |a| a.category.as_str()),
            sources: options_of(articles, |a| a.source.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrganizationRef;

    fn rocket(name: &str, org: &str, status: &str) -> Rocket {
        Rocket {
            name: name.into(),
            status: status.into(),
            organization: Some(OrganizationRef {
                id: 1,
                name: org.into(),
            }),
            ..Default::default()
        }
    }

    fn fleet() -> Vec<Rocket> {
        vec![
            rocket("Falcon 9", "SpaceX", "active"),
            rocket("Falcon Heavy", "SpaceX", "active"),
            rocket("Ariane 5", "Arianespace", "retired"),
            rocket("New Glenn", "Blue Origin", "active"),
        ]
    }

    #[test]
    fn search_matches_name_or_organization() {
        let rockets = fleet();
        let by_name = RocketFilter {
            search: "FALCON".into(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&rockets).len(), 2);

        let by_org = RocketFilter {
            search: "blue".into(),
            ..Default::default()
        };
        let hits = by_org.apply(&rockets);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "New Glenn");
    }

    #[test]
    fn whitespace_search_is_matched_literally() {
        let mut rockets = fleet();
        rockets.push(rocket("Electron", "RocketLab", "active"));
        let spaced = RocketFilter {
            search: " ".into(),
            ..Default::default()
        };
        let hits = spaced.apply(&rockets);
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|r| r.name != "Electron"));
    }

    #[test]
    fn equality_filters_are_anded() {
        let rockets = fleet();
        let filter = RocketFilter {
            search: String::new(),
            organization: Some("SpaceX".into()),
            status: Some("retired".into()),
        };
        assert!(filter.apply(&rockets).is_empty());

        let filter = RocketFilter {
            status: Some("active".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rockets).len(), 3);
    }

    #[test]
    fn empty_selection_string_means_unset() {
        let rockets = fleet();
        let filter = RocketFilter {
            organization: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rockets).len(), rockets.len());
    }

    #[test]
    fn filtering_is_idempotent_subset() {
        let rockets = fleet();
        let filter = RocketFilter {
            search: "a".into(),
            status: Some("active".into()),
            ..Default::default()
        };
        let once = filter.apply(&rockets);
        let twice = filter.apply(once.iter().copied());
        assert_eq!(once, twice);
        assert!(once.len() <= rockets.len());
        assert!(once.iter().all(|r| rockets.contains(*r)));
    }

    #[test]
    fn satellite_search_covers_purpose() {
        let sats = vec![
            Satellite {
                name: "Hubble".into(),
                purpose: "Space telescope".into(),
                orbit_type: "LEO".into(),
                ..Default::default()
            },
            Satellite {
                name: "GOES-16".into(),
                purpose: "Weather".into(),
                orbit_type: "GEO".into(),
                ..Default::default()
            },
        ];
        let filter = SatelliteFilter {
            search: "weather".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sats)[0].name, "GOES-16");

        let filter = SatelliteFilter {
            orbit_type: Some("LEO".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sats)[0].name, "Hubble");
    }

    #[test]
    fn organization_filter_by_kind_and_country() {
        let orgs = vec![
            Organization {
                name: "NASA".into(),
                country: "United States".into(),
                kind: OrganizationKind::Government,
                ..Default::default()
            },
            Organization {
                name: "Rocket Lab".into(),
                country: "New Zealand".into(),
                kind: OrganizationKind::Private,
                ..Default::default()
            },
        ];
        let filter = OrganizationFilter {
            kind: Some(OrganizationKind::Private),
            ..Default::default()
        };
        assert_eq!(filter.apply(&orgs)[0].name, "Rocket Lab");

        let filter = OrganizationFilter {
            search: "states".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&orgs)[0].name, "NASA");
    }

    #[test]
    fn news_filter_by_source_and_text() {
        let news = vec![
            NewsArticle {
                title: "Starship flies again".into(),
                source: "SpaceNews".into(),
                category: "launches".into(),
                ..Default::default()
            },
            NewsArticle {
                title: "JWST spots galaxy".into(),
                summary: "Deep field imaging".into(),
                source: "NASA".into(),
                category: "science".into(),
                ..Default::default()
            },
        ];
        let filter = NewsFilter {
            search: "deep field".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&news).len(), 1);

        let filter = NewsFilter {
            source: Some("SpaceNews".into()),
            category: Some("science".into()),
            ..Default::default()
        };
        assert!(filter.apply(&news).is_empty());
    }

    #[test]
    fn mission_filter_all_and_by_status() {
        let missions = vec![
            Mission {
                status: MissionStatus::Ongoing,
                ..Default::default()
            },
            Mission {
                status: MissionStatus::Completed,
                ..Default::default()
            },
        ];
        assert_eq!(MissionFilter::default().apply(&missions).len(), 2);
        let filter = MissionFilter {
            status: Some(MissionStatus::Completed),
        };
        assert_eq!(filter.apply(&missions).len(), 1);

        let all: MissionFilter = serde_json::from_value(serde_json::json!({"status": "all"})).unwrap();
        assert_eq!(all.status, None);
        assert_eq!(all.apply(&missions).len(), 2);

        let ongoing: MissionFilter =
            serde_json::from_value(serde_json::json!({"status": "ongoing"})).unwrap();
        assert_eq!(ongoing.status, Some(MissionStatus::Ongoing));
        assert_eq!(ongoing.apply(&missions).len(), 1);
    }

    #[test]
    fn options_skip_blanks_and_keep_first_seen_order() {
        let mut rockets = fleet();
        rockets.push(rocket("Mystery", "", "active"));
        let opts = RocketFilter::options(&rockets);
        assert_eq!(opts.organizations, vec!["SpaceX", "Arianespace", "Blue Origin"]);
        assert_eq!(opts.statuses, vec!["active", "retired"]);
    }
}
