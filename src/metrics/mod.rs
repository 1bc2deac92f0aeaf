//! Values derived from fetched snapshots: launch countdowns, relative
//! timestamps, filter option lists and mission tab counters.

use crate::domain::{Mission, MissionStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;

pub mod cost;

pub use cost::{estimate_cost, CostBreakdown, CostEstimator, CostFactors};

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Whole days, hours and minutes until launch; leftover seconds are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

/// What a launch card shows: a running countdown or the recorded outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LaunchClock {
    Countdown(Countdown),
    Outcome,
}

pub fn countdown(seconds: i64) -> LaunchClock {
    if seconds <= 0 {
        return LaunchClock::Outcome;
    }
    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    LaunchClock::Countdown(Countdown {
        days,
        hours,
        minutes,
    })
}

/// Coarsest non-zero unit of elapsed time, capped at days
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_seconds();
    if elapsed < SECONDS_PER_MINUTE {
        "Just now".to_string()
    } else if elapsed < SECONDS_PER_HOUR {
        format!("{}m ago", elapsed / SECONDS_PER_MINUTE)
    } else if elapsed < SECONDS_PER_DAY {
        format!("{}h ago", elapsed / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", elapsed / SECONDS_PER_DAY)
    }
}

/// Distinct keys in order of first occurrence
pub fn distinct_values<'a, T, K, I>(items: I, key: impl Fn(&'a T) -> K) -> Vec<K>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let k = key(item);
        if seen.insert(k.clone()) {
            out.push(k);
        }
    }
    out
}

/// Counters behind the mission status tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub ongoing: usize,
    pub planned: usize,
    pub completed: usize,
}

pub fn status_counts(missions: &[Mission]) -> StatusCounts {
    missions.iter().fold(
        StatusCounts {
            all: missions.len(),
            ..Default::default()
        },
        |mut acc, m| {
            match m.status {
                MissionStatus::Ongoing => acc.ongoing += 1,
                MissionStatus::Planned => acc.planned += 1,
                MissionStatus::Completed => acc.completed += 1,
                MissionStatus::Cancelled | MissionStatus::Unknown => {}
            }
            acc
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn countdown_drops_remainder_seconds() {
        assert_eq!(
            countdown(90061),
            LaunchClock::Countdown(Countdown {
                days: 1,
                hours: 1,
                minutes: 1
            })
        );
    }

    #[test]
    fn countdown_under_a_minute_is_all_zero() {
        assert_eq!(
            countdown(59),
            LaunchClock::Countdown(Countdown {
                days: 0,
                hours: 0,
                minutes: 0
            })
        );
    }

    #[test]
    fn non_positive_seconds_show_outcome() {
        assert_eq!(countdown(0), LaunchClock::Outcome);
        assert_eq!(countdown(-3600), LaunchClock::Outcome);
    }

    #[test]
    fn time_ago_tiers() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now - Duration::seconds(30), now), "Just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2d ago");
        assert_eq!(time_ago(now - Duration::days(400), now), "400d ago");
    }

    #[test]
    fn time_ago_future_reads_just_now() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now + Duration::hours(1), now), "Just now");
    }

    #[test]
    fn distinct_values_keep_first_occurrence_order() {
        let statuses = ["active", "retired", "active", "development", "retired"];
        let out = distinct_values(statuses.iter(), |s| s.to_string());
        assert_eq!(out, vec!["active", "retired", "development"]);
    }

    #[test]
    fn distinct_values_of_empty_is_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(distinct_values(&empty, |s| s.clone()).is_empty());
    }

    #[test]
    fn mission_counts_by_status() {
        let mk = |status| Mission {
            status,
            ..Default::default()
        };
        let missions = vec![
            mk(MissionStatus::Ongoing),
            mk(MissionStatus::Planned),
            mk(MissionStatus::Planned),
            mk(MissionStatus::Cancelled),
        ];
        assert_eq!(
            status_counts(&missions),
            StatusCounts {
                all: 4,
                ongoing: 1,
                planned: 2,
                completed: 0
            }
        );
    }
}
