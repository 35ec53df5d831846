use crate::domain::common::{deserialize_amount, deserialize_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 3W ("who does what where") project as returned by `api/v2/project/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub reporting_ns: Option<i64>,
    #[serde(default)]
    pub reporting_ns_name: Option<String>,
    #[serde(default)]
    pub project_country: Option<i64>,
    #[serde(default)]
    pub programme_type: i32,
    #[serde(default)]
    pub programme_type_display: Option<String>,
    #[serde(default)]
    pub primary_sector: i32,
    #[serde(default)]
    pub primary_sector_display: Option<String>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub status_display: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub target_total: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub reached_total: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub budget_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
}

impl Project {
    pub fn project_status(&self) -> Option<ProjectStatus> {
        ProjectStatus::from_code(self.status)
    }

    pub fn is_ongoing(&self) -> bool {
        self.project_status() == Some(ProjectStatus::Ongoing)
    }
}

/// Project status (`status`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Planned,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Planned,
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
    ];

    pub fn code(&self) -> i32 {
        match self {
            ProjectStatus::Planned => 0,
            ProjectStatus::Ongoing => 1,
            ProjectStatus::Completed => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// Programme types (`programme_type`), `(code, label)`
pub const PROGRAMME_TYPES: &[(i32, &str)] = &[(0, "Bilateral"), (1, "Multilateral"), (2, "Domestic")];

/// Project sectors (`primary_sector`), `(code, label)`
pub const SECTORS: &[(i32, &str)] = &[
    (0, "WASH"),
    (1, "PGI"),
    (2, "CEA"),
    (3, "Migration"),
    (4, "Health"),
    (5, "DRR"),
    (6, "Shelter"),
    (7, "NS Strengthening"),
    (8, "Education"),
    (9, "Livelihoods and basic needs"),
    (10, "Other"),
];

fn label_for(table: &[(i32, &'static str)], code: i32) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

impl Project {
    /// Display name from the API, else the known label for the code.
    pub fn programme_type_label(&self) -> Option<String> {
        self.programme_type_display
            .clone()
            .or_else(|| label_for(PROGRAMME_TYPES, self.programme_type).map(str::to_string))
    }

    pub fn sector_label(&self) -> Option<String> {
        self.primary_sector_display
            .clone()
            .or_else(|| label_for(SECTORS, self.primary_sector).map(str::to_string))
    }
}
