use serde::{Deserialize, Serialize};

/// Country as embedded in appeal, emergency and report records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub iso: Option<String>,
    #[serde(default)]
    pub region: Option<i64>,
}

/// Disaster type (`dtype`) as embedded in records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisasterTypeRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Link from a record to its parent emergency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRef {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Disaster types offered in `dtype` filters, `(id, name)`
pub const DISASTER_TYPES: &[(i64, &str)] = &[
    (1, "Epidemic"),
    (2, "Earthquake"),
    (4, "Cyclone"),
    (5, "Population Movement"),
    (6, "Complex Emergency"),
    (7, "Civil Unrest"),
    (8, "Volcanic Eruption"),
    (11, "Tsunami"),
    (12, "Flood"),
    (14, "Cold Wave"),
    (15, "Fire"),
    (19, "Heat Wave"),
    (20, "Drought"),
    (21, "Food Insecurity"),
    (23, "Storm Surge"),
    (24, "Landslide"),
    (27, "Pluvial/Flash Flood"),
    (54, "Transport Accident"),
    (66, "Biological Emergency"),
    (13, "Other"),
];

pub fn disaster_type_name(id: i64) -> Option<&'static str> {
    DISASTER_TYPES
        .iter()
        .find(|(dtype, _)| *dtype == id)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disaster_type_ids_are_unique() {
        for (i, (id, _)) in DISASTER_TYPES.iter().enumerate() {
            assert!(DISASTER_TYPES[i + 1..].iter().all(|(other, _)| other != id));
        }
        assert_eq!(disaster_type_name(12), Some("Flood"));
        assert_eq!(disaster_type_name(999), None);
    }

    #[test]
    fn test_country_ref_tolerates_sparse_payload() {
        let country: CountryRef = serde_json::from_str(r#"{"id": 84}"#).unwrap();
        assert_eq!(country.name, "");
        assert!(country.iso.is_none());
    }
}
