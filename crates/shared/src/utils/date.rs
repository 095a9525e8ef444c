use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Human readable form used in responses, e.g. `Sun Jan 01 2023`
pub const DATE_STRING_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    DATE_STRING_FORMAT,
];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn to_date_string(date: &NaiveDate) -> String {
    date.format(DATE_STRING_FORMAT).to_string()
}

/// Parses the date formats a client is likely to send. Anything with a time
/// component is truncated to the date it names
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|d| d.date_naive())
        })
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
                .map(|d| d.date())
        })
}

/// Serde helper to (de)serialize a date as [`DATE_STRING_FORMAT`]
pub mod date_string {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{to_date_string, DATE_STRING_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_date_string(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_STRING_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_string_matches_browser_format() {
        assert_eq!(to_date_string(&ymd(2023, 1, 1)), "Sun Jan 01 2023");
        assert_eq!(to_date_string(&ymd(1990, 12, 25)), "Tue Dec 25 1990");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2023-01-01"), Some(ymd(2023, 1, 1)));
        assert_eq!(parse_date(" 2023-01-01 "), Some(ymd(2023, 1, 1)));
        assert_eq!(parse_date("2023-02-03T10:11:12Z"), Some(ymd(2023, 2, 3)));
        assert_eq!(parse_date("2023-02-03T10:11"), Some(ymd(2023, 2, 3)));
        assert_eq!(parse_date("Sun Jan 01 2023"), Some(ymd(2023, 1, 1)));
        assert_eq!(parse_date("2023/01/01"), Some(ymd(2023, 1, 1)));
        assert_eq!(parse_date("01/15/2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_date("January 1, 2023"), Some(ymd(2023, 1, 1)));
        assert_eq!(parse_date("Jan 15 2023"), Some(ymd(2023, 1, 15)));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2023-13-01"), None);
        assert_eq!(parse_date(""), None);
    }
}
