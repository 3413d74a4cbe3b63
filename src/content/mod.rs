//! Curated island content: fixed vocabularies and lookup tables.
//!
//! Everything here is hand-authored data, not computed. Filters treat any
//! label outside these vocabularies as inert.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel location value meaning "no location filter"
pub const LOCATION_ALL: &str = "all";

/// Villages and ports the location filter knows about
pub const VILLAGES: &[&str] = &[
    "Apollonia",
    "Artemonas",
    "Kamares",
    "Platis Gialos",
    "Vathi",
    "Faros",
    "Kastro",
    "Cherronisos",
    "Exambela",
];

/// Villages sitting directly on a beach
pub const BEACH_VILLAGES: &[&str] = &[
    "Kamares",
    "Platis Gialos",
    "Vathi",
    "Faros",
    "Cherronisos",
];

pub fn is_known_village(name: &str) -> bool {
    VILLAGES.iter().any(|v| v.eq_ignore_ascii_case(name))
}

pub fn is_beach_village(name: &str) -> bool {
    BEACH_VILLAGES.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// Marketing category a property can be tagged with
///
/// The vocabulary is fixed; `parse` returns None for anything else so
/// unrecognized tags stay inert instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryTag {
    Luxury,
    Villas,
    FamilyFriendly,
    Budget,
    Boutique,
    Traditional,
}

impl CategoryTag {
    pub const ALL: &'static [CategoryTag] = &[
        CategoryTag::Luxury,
        CategoryTag::Villas,
        CategoryTag::FamilyFriendly,
        CategoryTag::Budget,
        CategoryTag::Boutique,
        CategoryTag::Traditional,
    ];

    pub fn parse(label: &str) -> Option<CategoryTag> {
        match label.trim().to_lowercase().as_str() {
            "luxury" => Some(CategoryTag::Luxury),
            "villas" => Some(CategoryTag::Villas),
            "family-friendly" => Some(CategoryTag::FamilyFriendly),
            "budget" => Some(CategoryTag::Budget),
            "boutique" => Some(CategoryTag::Boutique),
            "traditional" => Some(CategoryTag::Traditional),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryTag::Luxury => "luxury",
            CategoryTag::Villas => "villas",
            CategoryTag::FamilyFriendly => "family-friendly",
            CategoryTag::Budget => "budget",
            CategoryTag::Boutique => "boutique",
            CategoryTag::Traditional => "traditional",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-property branding overrides, keyed by record id.
///
/// A handful of properties ship their own logo asset instead of the
/// default thumbnail. Kept as a data table so display code never matches
/// on property names.
const BRANDING_OVERRIDES: &[(&str, &str)] = &[
    ("sif-verina", "/assets/logos/verina.svg"),
    ("sif-kamaroti", "/assets/logos/kamaroti.svg"),
    ("sif-niriedes", "/assets/logos/niriedes.svg"),
];

pub fn branding_override(id: &str) -> Option<&'static str> {
    BRANDING_OVERRIDES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, path)| *path)
}
