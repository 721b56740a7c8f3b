use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Roster identifier, kept in its canonical lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Captured once per run; every fallback in the run shares this salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTimestamp(DateTime<FixedOffset>);

impl RunTimestamp {
    pub fn capture<Tz: TimeZone>(tz: &Tz) -> Self {
        Self(Utc::now().with_timezone(tz).fixed_offset())
    }

    pub fn from_datetime(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// ISO-8601 with a numeric offset. Whole seconds carry no fraction,
    /// anything else is rendered to the microsecond.
    pub fn to_iso8601(&self) -> String {
        let precision = if self.0.nanosecond() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        self.0.to_rfc3339_opts(precision, false)
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftEntry {
    pub participant: Participant,
    /// `None` means the fallback material was hashed.
    pub team_name: Option<String>,
    pub hash_material: String,
    pub digest: String,
    pub note: Option<String>,
}

impl DraftEntry {
    pub fn used_fallback(&self) -> bool {
        self.team_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditLine {
    pub participant: Participant,
    pub hash_material: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftReport {
    pub timezone: String,
    pub run_timestamp: String,
    /// Sorted ascending by digest.
    pub order: Vec<DraftEntry>,
    /// Roster order.
    pub audit: Vec<AuditLine>,
    pub store_path: PathBuf,
    pub saved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_is_lowercased() {
        assert_eq!(Participant::new("AndyPramith").as_str(), "andypramith");
    }

    #[test]
    fn test_whole_second_timestamp_has_no_fraction() {
        let at = DateTime::parse_from_rfc3339("2024-01-01T00:00:00-08:00").unwrap();
        assert_eq!(
            RunTimestamp::from_datetime(at).to_iso8601(),
            "2024-01-01T00:00:00-08:00"
        );
    }

    #[test]
    fn test_fractional_timestamp_uses_microseconds() {
        let at = DateTime::parse_from_rfc3339("2024-07-04T12:30:15.123456789-07:00").unwrap();
        assert_eq!(
            RunTimestamp::from_datetime(at).to_iso8601(),
            "2024-07-04T12:30:15.123456-07:00"
        );
    }

    #[test]
    fn test_capture_uses_zone_offset() {
        let ts = RunTimestamp::capture(&chrono_tz::America::Los_Angeles);
        let offset = ts.datetime().offset().local_minus_utc();
        assert!(offset == -8 * 3600 || offset == -7 * 3600);
    }
}
