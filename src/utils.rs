/// Utility functions
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Extract number from JSON value
pub fn num(v: &Value) -> Option<f64> {
    if let Some(x) = v.as_f64() {
        return Some(x);
    }
    if let Some(s) = v.as_str() {
        return s.trim().parse::<f64>().ok();
    }
    None
}

/// Parse the timestamp formats the API is known to emit
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

/// Timestamp from a JSON string or unix seconds
pub fn timestamp(v: &Value) -> Option<DateTime<Utc>> {
    if let Some(s) = v.as_str() {
        return parse_timestamp(s);
    }
    v.as_i64().and_then(|n| Utc.timestamp_opt(n, 0).single())
}

/// Case-insensitive substring test; an empty needle matches everything
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Serde adapters for loosely typed API fields
pub mod lenient {
    use super::{num, timestamp};
    use chrono::{DateTime, Utc};
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Value;

    /// Number or numeric string; null reads as zero
    pub fn f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        if v.is_null() {
            return Ok(0.0);
        }
        num(&v).ok_or_else(|| D::Error::custom(format!("expected a number, got {v}")))
    }

    pub fn i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        if v.is_null() {
            return Ok(0);
        }
        if let Some(n) = v.as_i64() {
            return Ok(n);
        }
        num(&v)
            .map(|x| x.trunc() as i64)
            .ok_or_else(|| D::Error::custom(format!("expected an integer, got {v}")))
    }

    /// Null or unparseable timestamps read as absent
    pub fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        Ok(timestamp(&v))
    }

    /// Null reads as the type's default (enums, flags, lists)
    pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Null reads as the empty string
    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_num_from_float() {
        let json = serde_json::json!(42.5);
        assert_eq!(num(&json), Some(42.5));
    }

    #[test]
    fn test_num_from_decimal_string() {
        let json = serde_json::json!("22800.0");
        assert_eq!(num(&json), Some(22800.0));
    }

    #[test]
    fn test_num_from_invalid() {
        let json = serde_json::json!("invalid");
        assert_eq!(num(&json), None);
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let dt = parse_timestamp("2024-01-15T10:30:00.000Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.timestamp(), 1705314600);
    }

    #[test]
    fn test_parse_timestamp_offset_is_normalized() {
        let dt = parse_timestamp("2024-01-15T12:30:00+02:00").unwrap();
        assert_eq!(dt.timestamp(), 1705314600);
    }

    #[test]
    fn test_parse_timestamp_date_only() {
        let dt = parse_timestamp("2030-07-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2030, 7, 1));
    }

    #[test]
    fn test_timestamp_from_unix_seconds() {
        let json = serde_json::json!(1705315800);
        assert!(timestamp(&json).is_some());
    }

    #[test]
    fn test_timestamp_garbage() {
        assert_eq!(timestamp(&serde_json::json!("soon")), None);
        assert_eq!(timestamp(&serde_json::json!(null)), None);
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Falcon Heavy", "falcon"));
        assert!(contains_ci("Falcon Heavy", "HEAVY"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("Ariane 6", "falcon"));
    }
}
