//! Aggregations over fetched rows: grouping, totals and percentages used by
//! the summary headers of the list pages.

use chrono::{DateTime, Utc};
use contracts::domain::a002_appeal::aggregate::Appeal;
use contracts::domain::a003_emergency::aggregate::Emergency;
use std::collections::HashMap;
use std::hash::Hash;

/// Groups items by key. Groups appear in first-seen order and keep the
/// input order inside each group.
pub fn group_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }
    groups
}

/// Sum of the values; missing or non-finite values count as 0.
pub fn sum_by<T>(items: &[T], value_fn: impl Fn(&T) -> Option<f64>) -> f64 {
    items
        .iter()
        .filter_map(|item| value_fn(item).filter(|v| v.is_finite()))
        .sum()
}

/// `part` as a percentage of `whole`; 0 when `whole` is 0.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() || !part.is_finite() {
        return 0.0;
    }
    part / whole * 100.0
}

/// Largest groups first; equal sizes keep their original order.
pub fn rank_by_count<K, T>(mut groups: Vec<(K, Vec<T>)>) -> Vec<(K, Vec<T>)> {
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    groups
}

/// Latest item by timestamp. Items without a timestamp are ignored; ties
/// resolve to the earlier item.
pub fn most_recent<T>(items: &[T], date_fn: impl Fn(&T) -> Option<DateTime<Utc>>) -> Option<&T> {
    items
        .iter()
        .filter_map(|item| date_fn(item).map(|d| (d, item)))
        .fold(None, |best: Option<(DateTime<Utc>, &T)>, (d, item)| match best {
            Some((best_d, _)) if best_d >= d => best,
            _ => Some((d, item)),
        })
        .map(|(_, item)| item)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppealStats {
    pub num_beneficiaries: i64,
    pub amount_requested: f64,
    pub amount_funded: f64,
}

impl AppealStats {
    pub fn funded_percent(&self) -> f64 {
        percent_of(self.amount_funded, self.amount_requested)
    }
}

pub fn aggregate_appeal_stats(appeals: &[Appeal]) -> AppealStats {
    AppealStats {
        num_beneficiaries: appeals.iter().filter_map(|a| a.num_beneficiaries).sum(),
        amount_requested: sum_by(appeals, |a| a.amount_requested),
        amount_funded: sum_by(appeals, |a| a.amount_funded),
    }
}

pub fn funded_percent(appeal: &Appeal) -> f64 {
    percent_of(
        appeal.amount_funded.unwrap_or(0.0),
        appeal.amount_requested.unwrap_or(0.0),
    )
}

pub const UNKNOWN_DISASTER_TYPE: &str = "Other";

/// Emergencies grouped by disaster type name, most frequent first.
pub fn group_by_disaster_type(emergencies: &[Emergency]) -> Vec<(String, Vec<&Emergency>)> {
    rank_by_count(group_by_key(emergencies, |e| {
        e.dtype
            .as_ref()
            .map(|d| d.name.clone())
            .unwrap_or_else(|| UNKNOWN_DISASTER_TYPE.to_string())
    }))
}

/// Most recently started emergency
pub fn latest_emergency(emergencies: &[Emergency]) -> Option<&Emergency> {
    most_recent(emergencies, |e| e.disaster_start_date)
}
