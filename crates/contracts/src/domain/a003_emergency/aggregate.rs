use crate::domain::common::{deserialize_amount, deserialize_timestamp, CountryRef, DisasterTypeRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Emergency (event) as returned by `api/v2/event/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emergency {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub dtype: Option<DisasterTypeRef>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub disaster_start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub glide: Option<String>,
    #[serde(default)]
    pub countries: Vec<CountryRef>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub num_affected: Option<f64>,
    #[serde(default)]
    pub appeals: Vec<EmergencyAppeal>,
}

/// Funding summary of an appeal attached to an emergency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyAppeal {
    pub id: i64,
    #[serde(default)]
    pub atype: i32,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount_requested: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount_funded: Option<f64>,
}

impl Emergency {
    pub fn country_names(&self) -> String {
        self.countries
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_emergency() {
        let raw = r#"{
            "id": 5012,
            "name": "Philippines - Typhoon",
            "dtype": {"id": 4, "name": "Cyclone"},
            "disaster_start_date": "2024-01-08T00:00:00Z",
            "countries": [{"id": 123, "name": "Philippines"}, {"id": 124, "name": "Palau"}],
            "num_affected": 100000,
            "appeals": [{"id": 1, "atype": 0, "amount_requested": "500000", "amount_funded": null}]
        }"#;
        let emergency: Emergency = serde_json::from_str(raw).unwrap();
        assert_eq!(emergency.country_names(), "Philippines, Palau");
        assert_eq!(emergency.appeals[0].amount_requested, Some(500000.0));
        assert_eq!(emergency.appeals[0].amount_funded, None);
        assert_eq!(emergency.disaster_start_date.map(|d| d.date_naive().to_string()).as_deref(), Some("2024-01-08"));
        assert_eq!(emergency.created_at, None);
    }
}
