//! Listing filter pipeline.
//!
//! A pure, synchronous transformation: the current filter selections plus
//! an optional free-text query shrink a snapshot of accommodation records
//! down to the visible set. Active predicates combine with logical AND,
//! absent fields never match instead of erroring, and the relative order
//! of the input is preserved throughout.

pub mod predicates;
pub mod search;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::{CategoryTag, LOCATION_ALL};
use crate::models::Accommodation;

pub use predicates::{Amenity, PriceRange};
pub use search::matches_query;

/// The user's current filter selections.
///
/// `default()` is the identity filter: every record passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterState {
    pub category: Option<CategoryTag>,
    /// Exact star-rating target; 0 means no rating filter
    pub star_rating: u8,
    /// Substring location match; "all" means no location filter
    pub location: String,
    pub price_range: Option<PriceRange>,
    pub amenities: BTreeSet<Amenity>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            star_rating: 0,
            location: LOCATION_ALL.to_string(),
            price_range: None,
            amenities: BTreeSet::new(),
        }
    }
}

impl FilterState {
    /// True when no predicate is active
    pub fn is_identity(&self) -> bool {
        self.category.is_none()
            && self.star_rating == 0
            && (self.location.trim().is_empty()
                || self.location.trim().eq_ignore_ascii_case(LOCATION_ALL))
            && self.price_range.is_none()
            && self.amenities.is_empty()
    }

    /// Logical AND across every active predicate
    pub fn matches(&self, record: &Accommodation) -> bool {
        if let Some(category) = self.category {
            if !predicates::matches_category(record, category) {
                return false;
            }
        }
        if !predicates::matches_star_rating(record, self.star_rating) {
            return false;
        }
        if !predicates::matches_location(record, &self.location) {
            return false;
        }
        if !predicates::matches_price_range(record, self.price_range) {
            return false;
        }
        self.amenities
            .iter()
            .all(|&amenity| predicates::matches_amenity(record, amenity))
    }
}

/// Apply the filter selections, preserving source order
pub fn apply_filters(records: &[Accommodation], filters: &FilterState) -> Vec<Accommodation> {
    records
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect()
}

/// Full pipeline: filter selections first, then the text pass
pub fn apply(records: &[Accommodation], filters: &FilterState, query: &str) -> Vec<Accommodation> {
    let narrowed = apply_filters(records, filters);
    search::search(&narrowed, query)
}
