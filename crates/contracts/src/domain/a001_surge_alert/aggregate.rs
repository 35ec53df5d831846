use crate::domain::common::{deserialize_required_timestamp, EventRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Surge alert as returned by `api/v2/surge_alert/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeAlert {
    pub id: i64,
    pub atype: i32,
    pub category: i32,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(deserialize_with = "deserialize_required_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub event: Option<EventRef>,
}

impl SurgeAlert {
    pub fn alert_type(&self) -> Option<AlertType> {
        AlertType::from_code(self.atype)
    }

    pub fn alert_category(&self) -> Option<AlertCategory> {
        AlertCategory::from_code(self.category)
    }
}

/// Kind of surge alert (`atype`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertType {
    Fact,
    Sims,
    Eru,
    DheOps,
    HeOps,
    Surge,
    RapidResponse,
}

impl AlertType {
    pub const ALL: [AlertType; 7] = [
        AlertType::Fact,
        AlertType::Sims,
        AlertType::Eru,
        AlertType::DheOps,
        AlertType::HeOps,
        AlertType::Surge,
        AlertType::RapidResponse,
    ];

    pub fn code(&self) -> i32 {
        match self {
            AlertType::Fact => 0,
            AlertType::Sims => 1,
            AlertType::Eru => 2,
            AlertType::DheOps => 3,
            AlertType::HeOps => 4,
            AlertType::Surge => 5,
            AlertType::RapidResponse => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertType::Fact => "FACT",
            AlertType::Sims => "SIMS",
            AlertType::Eru => "ERU",
            AlertType::DheOps => "DHEOps",
            AlertType::HeOps => "HEOps",
            AlertType::Surge => "SURGE",
            AlertType::RapidResponse => "Rapid Response",
        }
    }
}

/// Alert category (`category`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertCategory {
    Info,
    Deployment,
    Alert,
    Shelter,
    StandDown,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 5] = [
        AlertCategory::Info,
        AlertCategory::Deployment,
        AlertCategory::Alert,
        AlertCategory::Shelter,
        AlertCategory::StandDown,
    ];

    pub fn code(&self) -> i32 {
        match self {
            AlertCategory::Info => 0,
            AlertCategory::Deployment => 1,
            AlertCategory::Alert => 2,
            AlertCategory::Shelter => 3,
            AlertCategory::StandDown => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertCategory::Info => "Info",
            AlertCategory::Deployment => "Deployment",
            AlertCategory::Alert => "Alert",
            AlertCategory::Shelter => "Shelter",
            AlertCategory::StandDown => "Stand down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_surge_alert() {
        let raw = r#"{
            "id": 7,
            "atype": 6,
            "category": 4,
            "operation": "Floods",
            "message": "Stand down of the rapid response team",
            "created_at": "2024-05-02T10:00:00Z",
            "event": {"id": 3301}
        }"#;
        let alert: SurgeAlert = serde_json::from_str(raw).unwrap();
        assert_eq!(alert.alert_type(), Some(AlertType::RapidResponse));
        assert_eq!(alert.alert_category().map(|c| c.label()), Some("Stand down"));
        assert_eq!(alert.event.map(|e| e.id), Some(3301));
        assert_eq!(alert.created_at.to_rfc3339(), "2024-05-02T10:00:00+00:00");
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(AlertType::from_code(99), None);
        assert_eq!(AlertCategory::from_code(-1), None);
    }
}
