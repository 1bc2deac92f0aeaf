//! Display-ready projections of launches and news articles.

use crate::domain::{Launch, NewsArticle};
use crate::metrics::{time_ago, LaunchClock};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LaunchCard {
    #[serde(flatten)]
    pub launch: Launch,
    pub clock: LaunchClock,
}

impl From<Launch> for LaunchCard {
    fn from(launch: Launch) -> Self {
        let clock = launch.clock();
        Self { launch, clock }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsCard {
    #[serde(flatten)]
    pub article: NewsArticle,
    pub published: Option<String>,
}

impl NewsCard {
    pub fn new(article: NewsArticle, now: DateTime<Utc>) -> Self {
        let published = article.published_at.map(|at| time_ago(at, now));
        Self { article, published }
    }
}

pub fn launch_cards(launches: impl IntoIterator<Item = Launch>) -> Vec<LaunchCard> {
    launches.into_iter().map(LaunchCard::from).collect()
}

pub fn news_cards(articles: impl IntoIterator<Item = NewsArticle>, now: DateTime<Utc>) -> Vec<NewsCard> {
    articles.into_iter().map(|a| NewsCard::new(a, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Countdown;
    use chrono::{Duration, TimeZone};

    #[test]
    fn upcoming_launch_card_counts_down() {
        let card = LaunchCard::from(Launch {
            countdown_seconds: 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5,
            ..Default::default()
        });
        assert_eq!(
            card.clock,
            LaunchClock::Countdown(Countdown {
                days: 2,
                hours: 3,
                minutes: 4
            })
        );
        let v = serde_json::to_value(&card).unwrap();
        assert_eq!(v["clock"]["kind"], "countdown");
        assert_eq!(v["clock"]["days"], 2);
    }

    #[test]
    fn past_launch_card_shows_outcome() {
        let card = LaunchCard::from(Launch {
            countdown_seconds: 0,
            outcome: "success".into(),
            ..Default::default()
        });
        assert_eq!(card.clock, LaunchClock::Outcome);
        let v = serde_json::to_value(&card).unwrap();
        assert_eq!(v["outcome"], "success");
    }

    #[test]
    fn news_card_reads_relative_time() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
        let card = NewsCard::new(
            NewsArticle {
                published_at: Some(now - Duration::hours(3)),
                ..Default::default()
            },
            now,
        );
        assert_eq!(card.published.as_deref(), Some("3h ago"));

        let undated = NewsCard::new(NewsArticle::default(), now);
        assert!(undated.published.is_none());
    }
}
