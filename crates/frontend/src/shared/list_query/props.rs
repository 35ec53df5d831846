use contracts::domain::a002_appeal::aggregate::AppealKind;

/// External inputs a page hands to a list view.
///
/// Only some of them feed the query; which ones is declared per collection
/// through [`ListDependency`](super::ListDependency). Everything else
/// (e.g. `title`) can change without triggering a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProps {
    /// Page size override
    pub limit: Option<u32>,
    pub country: Option<i64>,
    pub country_iso: Option<String>,
    pub region: Option<i64>,
    pub emergency: Option<i64>,
    pub reporting_ns: Option<i64>,
    /// Pin the list to a single record id
    pub record: Option<i64>,
    pub appeal_kind: Option<AppealKind>,
    pub show_recent: bool,
    pub show_active: bool,
    pub title: Option<String>,
}

impl ListProps {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn recent(mut self) -> Self {
        self.show_recent = true;
        self
    }

    pub fn active(mut self) -> Self {
        self.show_active = true;
        self
    }
}
