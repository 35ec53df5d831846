use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// IFRC region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    AsiaPacific,
    Europe,
    Mena,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Africa,
        Region::Americas,
        Region::AsiaPacific,
        Region::Europe,
        Region::Mena,
    ];

    pub fn id(&self) -> i64 {
        match self {
            Region::Africa => 0,
            Region::Americas => 1,
            Region::AsiaPacific => 2,
            Region::Europe => 3,
            Region::Mena => 4,
        }
    }

    /// Slug used in page URLs (`/regions/asiapacific`)
    pub fn slug(&self) -> &'static str {
        match self {
            Region::Africa => "africa",
            Region::Americas => "americas",
            Region::AsiaPacific => "asiapacific",
            Region::Europe => "europe",
            Region::Mena => "mena",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::AsiaPacific => "Asia Pacific",
            Region::Europe => "Europe",
            Region::Mena => "Middle East & North Africa",
        }
    }

    /// Country ids belonging to the region
    pub fn countries(&self) -> &'static [i64] {
        match self {
            Region::Africa => AFRICA,
            Region::Americas => AMERICAS,
            Region::AsiaPacific => ASIA_PACIFIC,
            Region::Europe => EUROPE,
            Region::Mena => MENA,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

static REGION_BY_SLUG: Lazy<HashMap<&'static str, Region>> =
    Lazy::new(|| Region::ALL.iter().map(|r| (r.slug(), *r)).collect());

pub fn region_by_id(id: i64) -> Option<Region> {
    Region::ALL.into_iter().find(|r| r.id() == id)
}

/// Case-insensitive slug lookup: `"MENA"` and `"mena"` both resolve.
pub fn region_by_name(name: &str) -> Option<Region> {
    REGION_BY_SLUG.get(name.to_lowercase().as_str()).copied()
}

pub fn region_id_by_name(name: &str) -> Option<i64> {
    region_by_name(name).map(|r| r.id())
}

/// Resolves a route parameter that is either a numeric id or a slug.
pub fn parse_region(id_or_name: &str) -> Option<Region> {
    match id_or_name.trim().parse::<i64>() {
        Ok(id) => region_by_id(id),
        Err(_) => region_by_name(id_or_name.trim()),
    }
}

pub fn countries_in_region(region_id: i64) -> &'static [i64] {
    region_by_id(region_id).map(|r| r.countries()).unwrap_or(&[])
}

/// Reverse lookup of a country's region
pub fn region_of_country(country_id: i64) -> Option<Region> {
    Region::ALL
        .into_iter()
        .find(|r| r.countries().contains(&country_id))
}

const AFRICA: &[i64] = &[
    12, 13, 18, 34, 39, 41, 43, 44, 45, 57, 63, 65, 69, 70, 73, 77, 93, 102, 103, 109, 110, 112,
    114, 115, 120, 122, 127, 128, 143, 150, 151, 152, 157, 158, 161, 163, 170, 176, 181, 182, 183,
    184, 185, 186, 187, 188, 189, 209, 290,
];

const AMERICAS: &[i64] = &[
    4, 5, 8, 19, 20, 25, 28, 31, 33, 35, 42, 46, 48, 51, 54, 58, 59, 60, 62, 75, 76, 79, 80, 81,
    90, 116, 126, 132, 134, 135, 172, 177, 178, 179, 180,
];

const ASIA_PACIFIC: &[i64] = &[
    7, 14, 22, 27, 36, 40, 47, 66, 84, 85, 91, 94, 99, 111, 121, 123, 125, 130, 131, 133, 136,
    147, 153, 156, 160, 169, 171, 191, 192, 193, 194, 195, 210, 211, 213, 227, 275, 279, 281,
];

const EUROPE: &[i64] = &[
    1, 3, 6, 11, 15, 17, 21, 23, 29, 30, 37, 53, 55, 56, 64, 67, 68, 71, 72, 74, 82, 83, 88, 89,
    98, 100, 105, 106, 107, 108, 113, 117, 124, 129, 138, 141, 142, 154, 155, 159, 164, 165, 167,
    174, 175, 197, 199, 200, 201, 202, 228, 270, 271,
];

const MENA: &[i64] = &[
    2, 10, 16, 26, 61, 87, 92, 97, 101, 119, 139, 149, 173, 203, 204, 205, 206, 222,
];
