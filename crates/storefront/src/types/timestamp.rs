//! Wire format for timestamps.
//!
//! The backend emits ISO-8601 strings, sometimes with an offset and
//! sometimes as a bare local date-time. Both decode to UTC; encoding is
//! always RFC 3339.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_with_offset() {
        let dt = parse("2024-03-01T10:15:00+07:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 3, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_local_as_utc() {
        let dt = parse("2024-03-01T10:15:00.123456").unwrap();
        assert_eq!(dt.timestamp(), Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap().timestamp());
        assert!(parse("2024-03-01 10:15:00").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_none());
        assert!(parse("2024-13-01T00:00:00").is_none());
    }
}
