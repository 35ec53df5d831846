use crate::domain::common::{
    deserialize_amount, deserialize_required_timestamp, deserialize_timestamp, CountryRef, DisasterTypeRef, EventRef,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field report as returned by `api/v2/field_report/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    pub id: i64,
    #[serde(default)]
    pub summary: String,
    #[serde(deserialize_with = "deserialize_required_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dtype: Option<DisasterTypeRef>,
    #[serde(default)]
    pub countries: Vec<CountryRef>,
    #[serde(default)]
    pub event: Option<EventRef>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub num_affected: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_report() {
        let raw = r#"{
            "id": 900,
            "summary": "PHI: Typhoon - 08-01-2024",
            "created_at": "2024-01-09T06:00:00Z",
            "updated_at": "2024-01-10T06:00:00Z",
            "countries": [{"id": 123, "name": "Philippines"}],
            "event": {"id": 5012, "name": "Philippines - Typhoon"},
            "num_affected": "3500"
        }"#;
        let report: FieldReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.event.map(|e| e.id), Some(5012));
        assert_eq!(report.num_affected, Some(3500.0));
        assert!(report.dtype.is_none());
        assert!(report.updated_at.is_some_and(|u| u > report.created_at));
    }

    #[test]
    fn test_field_report_requires_created_at() {
        let raw = r#"{"id": 901, "created_at": "yesterday"}"#;
        assert!(serde_json::from_str::<FieldReport>(raw).is_err());
    }
}
