use crate::domain::common::{deserialize_amount, deserialize_timestamp, CountryRef, DisasterTypeRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Appeal or DREF operation as returned by `api/v2/appeal/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appeal {
    pub id: i64,
    #[serde(default)]
    pub aid: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    pub atype: i32,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub dtype: Option<DisasterTypeRef>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub num_beneficiaries: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount_requested: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount_funded: Option<f64>,
    #[serde(default)]
    pub country: Option<CountryRef>,
    /// Parent emergency id
    #[serde(default)]
    pub event: Option<i64>,
}

impl Appeal {
    pub fn appeal_type(&self) -> Option<AppealType> {
        AppealType::from_code(self.atype)
    }

    pub fn appeal_status(&self) -> Option<AppealStatus> {
        AppealStatus::from_code(self.status)
    }
}

/// Appeal type (`atype`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppealType {
    Dref,
    EmergencyAppeal,
    InternationalAppeal,
    ForecastBasedAction,
}

impl AppealType {
    pub const ALL: [AppealType; 4] = [
        AppealType::Dref,
        AppealType::EmergencyAppeal,
        AppealType::InternationalAppeal,
        AppealType::ForecastBasedAction,
    ];

    pub fn code(&self) -> i32 {
        match self {
            AppealType::Dref => 0,
            AppealType::EmergencyAppeal => 1,
            AppealType::InternationalAppeal => 2,
            AppealType::ForecastBasedAction => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppealType::Dref => "DREF",
            AppealType::EmergencyAppeal => "Emergency Appeal",
            AppealType::InternationalAppeal => "International Appeal",
            AppealType::ForecastBasedAction => "Forecast Based Action",
        }
    }
}

/// Appeal lifecycle status (`status`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppealStatus {
    Active,
    Closed,
    Frozen,
    Archived,
}

impl AppealStatus {
    pub const ALL: [AppealStatus; 4] = [
        AppealStatus::Active,
        AppealStatus::Closed,
        AppealStatus::Frozen,
        AppealStatus::Archived,
    ];

    pub fn code(&self) -> i32 {
        match self {
            AppealStatus::Active => 0,
            AppealStatus::Closed => 1,
            AppealStatus::Frozen => 2,
            AppealStatus::Archived => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppealStatus::Active => "Active",
            AppealStatus::Closed => "Closed",
            AppealStatus::Frozen => "Frozen",
            AppealStatus::Archived => "Archived",
        }
    }
}

/// Scope a view can pin the appeals table to, independent of the user's
/// type filter. Pages pass `appeal` or `dref`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppealKind {
    Appeal,
    Dref,
}

impl AppealKind {
    /// The `atype` query value this kind pins.
    pub fn atype_code(&self) -> &'static str {
        match self {
            AppealKind::Appeal => "1",
            AppealKind::Dref => "0",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "appeal" => Some(AppealKind::Appeal),
            "dref" => Some(AppealKind::Dref),
            _ => None,
        }
    }
}
