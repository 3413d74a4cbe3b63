use serde::{Deserialize, Serialize};

use crate::content::{CategoryTag, LOCATION_ALL};
use crate::models::Accommodation;

/// Minimum star count for the third-party "luxury" proxy
const LUXURY_PROXY_MIN_STARS: u8 = 4;
/// Fallback review-score threshold (provider 0-10 scale) when stars are absent
const LUXURY_PROXY_MIN_SCORE: f64 = 8.5;

/// Amenity flags the listing UI can toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Wifi,
    Pool,
    Parking,
    Restaurant,
    Spa,
    SeaView,
}

impl Amenity {
    /// Substrings that mark a free-text amenity label as this amenity
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Amenity::Wifi => &["wifi", "internet"],
            Amenity::Pool => &["pool", "swimming"],
            Amenity::Parking => &["parking"],
            Amenity::Restaurant => &["restaurant", "dining"],
            Amenity::Spa => &["spa", "massage"],
            Amenity::SeaView => &["sea view", "seafront", "beachfront"],
        }
    }
}

/// Inclusive nightly price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Category predicate. Local records match on their tag set; third-party
/// records carry no tags, so only a "luxury" selection can match them,
/// through the star/score proxy.
pub fn matches_category(record: &Accommodation, target: CategoryTag) -> bool {
    match record {
        Accommodation::Local(stay) => stay
            .category_tags
            .iter()
            .any(|tag| CategoryTag::parse(tag) == Some(target)),
        Accommodation::ThirdParty(stay) => {
            if target != CategoryTag::Luxury {
                return false;
            }
            match stay.stars {
                Some(stars) => stars >= LUXURY_PROXY_MIN_STARS,
                None => stay.review_score >= LUXURY_PROXY_MIN_SCORE,
            }
        }
    }
}

/// Exact-match rating predicate; `target` 0 means no filter. Either the
/// star count or the 0-5 rating has to equal the target exactly, not
/// "at least".
pub fn matches_star_rating(record: &Accommodation, target: u8) -> bool {
    if target == 0 {
        return true;
    }
    record.stars() == Some(target) || record.rating() == f64::from(target)
}

/// Location predicate: case-insensitive substring containment, with the
/// "all" sentinel (or an empty selection) passing everything.
pub fn matches_location(record: &Accommodation, target: &str) -> bool {
    let target = target.trim();
    if target.is_empty() || target.eq_ignore_ascii_case(LOCATION_ALL) {
        return true;
    }
    record
        .location()
        .to_lowercase()
        .contains(&target.to_lowercase())
}

/// Amenity predicate: at least one label must contain one of the amenity's
/// keyword substrings. Third-party records can also satisfy wifi, pool and
/// parking through their provider boolean flags.
pub fn matches_amenity(record: &Accommodation, amenity: Amenity) -> bool {
    if let Accommodation::ThirdParty(stay) = record {
        let flagged = match amenity {
            Amenity::Wifi => stay.has_wifi,
            Amenity::Pool => stay.has_pool,
            Amenity::Parking => stay.has_parking,
            _ => false,
        };
        if flagged {
            return true;
        }
    }
    record.amenities().iter().any(|label| {
        let label = label.to_lowercase();
        amenity.keywords().iter().any(|kw| label.contains(kw))
    })
}

pub fn matches_price_range(record: &Accommodation, range: Option<PriceRange>) -> bool {
    match range {
        Some(range) => range.contains(record.price_per_night()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LivePricing, LiveStay, LocalStay};

    fn local_with(tags: &[&str], amenities: &[&str]) -> Accommodation {
        Accommodation::Local(LocalStay {
            id: "h1".to_string(),
            name: "Petali House".to_string(),
            location: "Apollonia".to_string(),
            description: "Traditional rooms above the main square.".to_string(),
            category_tags: tags.iter().map(|t| t.to_string()).collect(),
            price_per_night: 95.0,
            rating: 4.2,
            stars: Some(3),
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            photos: vec![],
        })
    }

    fn live_with(stars: Option<u8>, score: f64) -> Accommodation {
        Accommodation::ThirdParty(LiveStay {
            id: "b1".to_string(),
            name: "Kamares Bay Hotel".to_string(),
            location: "Kamares".to_string(),
            description: None,
            review_score: score,
            stars,
            price_per_night: 180.0,
            amenities: vec![],
            has_wifi: true,
            has_pool: false,
            has_parking: false,
            pricing: LivePricing { base_rate: 180.0, discount_percent: None, available: true },
            photos: vec![],
        })
    }

    #[test]
    fn category_matches_local_tags() {
        let record = local_with(&["luxury", "villas"], &[]);
        assert!(matches_category(&record, CategoryTag::Luxury));
        assert!(matches_category(&record, CategoryTag::Villas));
        assert!(!matches_category(&record, CategoryTag::FamilyFriendly));
    }

    #[test]
    fn unknown_tags_never_match() {
        let record = local_with(&["haunted", "LUXURY"], &[]);
        assert!(matches_category(&record, CategoryTag::Luxury));
        assert!(!matches_category(&record, CategoryTag::Budget));
    }

    #[test]
    fn luxury_proxy_uses_stars_then_score() {
        assert!(matches_category(&live_with(Some(4), 6.0), CategoryTag::Luxury));
        assert!(!matches_category(&live_with(Some(3), 9.9), CategoryTag::Luxury));
        assert!(matches_category(&live_with(None, 8.5), CategoryTag::Luxury));
        assert!(!matches_category(&live_with(None, 8.4), CategoryTag::Luxury));
        // Only luxury has a proxy; other categories never match live records
        assert!(!matches_category(&live_with(Some(5), 10.0), CategoryTag::Villas));
    }

    #[test]
    fn star_rating_is_exact_not_at_least() {
        let record = local_with(&[], &[]);
        assert!(matches_star_rating(&record, 3));
        assert!(!matches_star_rating(&record, 4));
        assert!(matches_star_rating(&record, 0));
    }

    #[test]
    fn rating_counts_when_stars_are_absent() {
        let record = live_with(None, 8.0); // common-scale rating 4.0
        assert!(matches_star_rating(&record, 4));
        assert!(!matches_star_rating(&record, 5));
    }

    #[test]
    fn location_substring_and_sentinel() {
        let record = local_with(&[], &[]);
        assert!(matches_location(&record, "all"));
        assert!(matches_location(&record, ""));
        assert!(matches_location(&record, "apollonia"));
        assert!(matches_location(&record, "Apoll"));
        assert!(!matches_location(&record, "Kamares"));
    }

    #[test]
    fn amenity_keywords_match_case_insensitively() {
        let record = local_with(&[], &["Free WiFi", "Pool"]);
        assert!(matches_amenity(&record, Amenity::Wifi));
        assert!(matches_amenity(&record, Amenity::Pool));
        assert!(!matches_amenity(&record, Amenity::Spa));

        let bare = local_with(&[], &["Pool"]);
        assert!(!matches_amenity(&bare, Amenity::Wifi));
    }

    #[test]
    fn third_party_boolean_flags_bypass_labels() {
        let record = live_with(Some(4), 8.0);
        assert!(matches_amenity(&record, Amenity::Wifi));
        assert!(!matches_amenity(&record, Amenity::Pool));
    }

    #[test]
    fn price_range_is_inclusive() {
        let record = local_with(&[], &[]); // 95.0 per night
        assert!(matches_price_range(&record, None));
        assert!(matches_price_range(&record, Some(PriceRange { min: 95.0, max: 100.0 })));
        assert!(!matches_price_range(&record, Some(PriceRange { min: 100.0, max: 200.0 })));
    }
}
