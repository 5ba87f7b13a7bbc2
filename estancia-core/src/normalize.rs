use chrono::NaiveDate;
use serde::Serialize;

/// Whether a fail-open parse produced a real value or fell back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    Parsed,
    Defaulted,
}

/// Trim a scalar text field. Missing values pass through as missing.
pub fn clean_text(value: Option<&str>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// A facility id list parsed from its bracketed string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityList {
    pub ids: Vec<i64>,
    pub status: ParseStatus,
}

/// Parse a bracketed comma-separated id list, e.g. `"[1, 2, 3]"`.
///
/// Non-numeric tokens are skipped. Missing input yields an empty,
/// defaulted list; any present string parses to whatever ids it holds.
pub fn parse_facility_list(value: Option<&str>) -> FacilityList {
    let raw = match value {
        Some(v) => v.trim(),
        None => {
            return FacilityList {
                ids: Vec::new(),
                status: ParseStatus::Defaulted,
            }
        }
    };

    let inner = raw.trim_matches(|c| c == '[' || c == ']');
    let ids = inner
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|t| t.parse::<i64>().ok())
        .collect();

    FacilityList {
        ids,
        status: ParseStatus::Parsed,
    }
}

/// A stay window parsed from a pair of raw date strings.
///
/// The structured dates are pair-or-nothing: if either half fails to parse,
/// both are dropped. The raw strings are always preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub start_raw: Option<String>,
    pub end_raw: Option<String>,
    #[serde(skip)]
    pub status: ParseStatus,
}

/// Parse a start/end date pair against a strict pattern.
pub fn parse_date_range(start: Option<&str>, end: Option<&str>, pattern: &str) -> DateRange {
    let start_raw = start.map(str::to_string);
    let end_raw = end.map(str::to_string);

    let parsed = match (start, end) {
        (Some(s), Some(e)) => NaiveDate::parse_from_str(s, pattern)
            .ok()
            .zip(NaiveDate::parse_from_str(e, pattern).ok()),
        _ => None,
    };

    match parsed {
        Some((s, e)) => DateRange {
            start: Some(s),
            end: Some(e),
            start_raw,
            end_raw,
            status: ParseStatus::Parsed,
        },
        None => DateRange {
            start: None,
            end: None,
            start_raw,
            end_raw,
            status: ParseStatus::Defaulted,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_trims() {
        assert_eq!(clean_text(Some("  Hotel Sol  ")), Some("Hotel Sol".into()));
        assert_eq!(clean_text(None), None);
    }

    #[test]
    fn test_facility_list_basic() {
        let parsed = parse_facility_list(Some("[1, 2, 3]"));
        assert_eq!(parsed.ids, vec![1, 2, 3]);
        assert_eq!(parsed.status, ParseStatus::Parsed);
    }

    #[test]
    fn test_facility_list_empty_brackets() {
        let parsed = parse_facility_list(Some("[]"));
        assert!(parsed.ids.is_empty());
        assert_eq!(parsed.status, ParseStatus::Parsed);
    }

    #[test]
    fn test_facility_list_skips_bad_tokens() {
        assert_eq!(parse_facility_list(Some("[1,x,3]")).ids, vec![1, 3]);
        assert_eq!(parse_facility_list(Some("[1, -2, 3]")).ids, vec![1, 3]);
    }

    #[test]
    fn test_facility_list_missing_defaults_empty() {
        let parsed = parse_facility_list(None);
        assert!(parsed.ids.is_empty());
        assert_eq!(parsed.status, ParseStatus::Defaulted);
    }

    #[test]
    fn test_date_range_valid_pair() {
        let range = parse_date_range(Some("2024-01-05"), Some("2024-01-09"), "%Y-%m-%d");
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 1, 9));
        assert_eq!(range.status, ParseStatus::Parsed);
    }

    #[test]
    fn test_date_range_bad_start_drops_both() {
        let range = parse_date_range(Some("not-a-date"), Some("2024-01-09"), "%Y-%m-%d");
        assert_eq!(range.start, None);
        assert_eq!(range.end, None);
        assert_eq!(range.start_raw.as_deref(), Some("not-a-date"));
        assert_eq!(range.end_raw.as_deref(), Some("2024-01-09"));
        assert_eq!(range.status, ParseStatus::Defaulted);
    }

    #[test]
    fn test_date_range_missing_half() {
        let range = parse_date_range(Some("2024-01-05"), None, "%Y-%m-%d");
        assert_eq!(range.start, None);
        assert_eq!(range.end, None);
        assert_eq!(range.start_raw.as_deref(), Some("2024-01-05"));
        assert_eq!(range.end_raw, None);
        assert_eq!(range.status, ParseStatus::Defaulted);
    }
}
