//! Trip recommendation heuristic.
//!
//! Takes a handful of preference tags plus stay-length and proximity
//! buckets and picks up to three records. No scoring model is involved:
//! each preference maps to one fixed filter, and the input snapshot is
//! assumed to be in store order (rating descending), so the first three
//! survivors are the suggestions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::{self, CategoryTag};
use crate::error::DiscoveryError;
use crate::models::Accommodation;

/// Hard cap on suggestions returned to the visitor
pub const MAX_SUGGESTIONS: usize = 3;

/// Rating floor (0-5 scale) for the "luxury" preference
const LUXURY_MIN_RATING: f64 = 4.0;
/// Nightly price ceiling for the "budget" preference
const BUDGET_MAX_PRICE: f64 = 150.0;

/// What the visitor says they care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Beach,
    Family,
    Luxury,
    Budget,
}

/// Stay-duration bucket. Carried on the wish but applies no filter; the
/// screen collects it without wiring it into the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayLength {
    Short,
    Medium,
    Long,
}

/// How far from the action the visitor wants to stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proximity {
    /// Walking distance from the ferry port
    NearPort,
    /// The capital and its neighbouring village
    AroundCapital,
    /// Directly on a beach
    Beachfront,
    Anywhere,
}

impl Proximity {
    /// Allow-list of village names for this bucket; None means no
    /// location constraint
    pub fn allowed_villages(&self) -> Option<&'static [&'static str]> {
        match self {
            Proximity::NearPort => Some(&["Kamares"]),
            Proximity::AroundCapital => Some(&["Apollonia", "Artemonas"]),
            Proximity::Beachfront => Some(content::BEACH_VILLAGES),
            Proximity::Anywhere => None,
        }
    }
}

/// A visitor's trip wish, as collected by the recommendation screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripWish {
    pub preferences: BTreeSet<Preference>,
    pub stay_length: StayLength,
    pub proximity: Proximity,
}

fn matches_proximity(record: &Accommodation, proximity: Proximity) -> bool {
    match proximity.allowed_villages() {
        None => true,
        Some(villages) => {
            let location = record.location().to_lowercase();
            villages.iter().any(|v| location.contains(&v.to_lowercase()))
        }
    }
}

fn matches_preference(record: &Accommodation, preference: Preference) -> bool {
    match preference {
        Preference::Luxury => record.rating() >= LUXURY_MIN_RATING,
        Preference::Budget => record.price_per_night() <= BUDGET_MAX_PRICE,
        Preference::Family => record
            .category_tags()
            .iter()
            .any(|tag| CategoryTag::parse(tag) == Some(CategoryTag::FamilyFriendly)),
        Preference::Beach => {
            content::is_beach_village(record.location())
                || record
                    .description()
                    .map(|d| d.to_lowercase().contains("beach"))
                    .unwrap_or(false)
        }
    }
}

/// Pick up to [`MAX_SUGGESTIONS`] records matching the wish.
///
/// Rejects an empty preference set before looking at any records; an empty
/// result after filtering is a normal state, not an error.
pub fn suggest(
    records: &[Accommodation],
    wish: &TripWish,
) -> Result<Vec<Accommodation>, DiscoveryError> {
    if wish.preferences.is_empty() {
        return Err(DiscoveryError::Validation(
            "Pick at least one preference before searching.".to_string(),
        ));
    }
    let suggestions = records
        .iter()
        .filter(|record| matches_proximity(record, wish.proximity))
        .filter(|record| {
            wish.preferences
                .iter()
                .all(|&preference| matches_preference(record, preference))
        })
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect();
    Ok(suggestions)
}

/// Screen state for the recommendation flow.
///
/// `Idle → SelectingPreferences → Searching → ResultsShown`, with reset
/// returning to preference selection. Nothing here survives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationFlow {
    #[default]
    Idle,
    SelectingPreferences,
    Searching,
    ResultsShown,
}

/// Drives the recommendation flow over a record snapshot
#[derive(Debug, Default)]
pub struct Recommender {
    flow: RecommendationFlow,
}

impl Recommender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flow(&self) -> RecommendationFlow {
        self.flow
    }

    /// The visitor opened the preference picker
    pub fn begin(&mut self) {
        self.flow = RecommendationFlow::SelectingPreferences;
    }

    /// Run the wish against the snapshot, tracking the flow states.
    /// Validation failures drop back to preference selection.
    pub fn search(
        &mut self,
        records: &[Accommodation],
        wish: &TripWish,
    ) -> Result<Vec<Accommodation>, DiscoveryError> {
        self.flow = RecommendationFlow::Searching;
        match suggest(records, wish) {
            Ok(results) => {
                self.flow = RecommendationFlow::ResultsShown;
                Ok(results)
            }
            Err(err) => {
                self.flow = RecommendationFlow::SelectingPreferences;
                Err(err)
            }
        }
    }

    /// Clear results and return to preference selection
    pub fn reset(&mut self) {
        self.flow = RecommendationFlow::SelectingPreferences;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalStay;

    fn stay(name: &str, location: &str, price: f64, rating: f64, tags: &[&str]) -> Accommodation {
        Accommodation::Local(LocalStay {
            id: name.to_lowercase(),
            name: name.to_string(),
            location: location.to_string(),
            description: format!("{name} in {location}."),
            category_tags: tags.iter().map(|t| t.to_string()).collect(),
            price_per_night: price,
            rating,
            stars: None,
            amenities: vec![],
            photos: vec![],
        })
    }

    fn snapshot() -> Vec<Accommodation> {
        // Store order: rating descending
        vec![
            stay("Verina", "Platis Gialos", 320.0, 4.9, &["luxury"]),
            stay("Niriedes", "Platis Gialos", 210.0, 4.7, &["luxury", "family-friendly"]),
            stay("Delfini", "Kamares", 110.0, 4.5, &["family-friendly"]),
            stay("Anthousa", "Apollonia", 85.0, 4.2, &["traditional"]),
            stay("Petra", "Kastro", 70.0, 3.6, &["budget"]),
        ]
    }

    fn wish(preferences: &[Preference], proximity: Proximity) -> TripWish {
        TripWish {
            preferences: preferences.iter().copied().collect(),
            stay_length: StayLength::Medium,
            proximity,
        }
    }

    #[test]
    fn zero_preferences_is_rejected_without_touching_records() {
        let err = suggest(&snapshot(), &wish(&[], Proximity::Anywhere)).unwrap_err();
        assert!(matches!(err, DiscoveryError::Validation(_)));
    }

    #[test]
    fn luxury_only_returns_high_rated_stays() {
        let out = suggest(&snapshot(), &wish(&[Preference::Luxury], Proximity::Anywhere)).unwrap();
        assert!(!out.is_empty());
        assert!(out.iter().all(|r| r.rating() >= 4.0));
    }

    #[test]
    fn results_are_capped_at_three() {
        let out = suggest(&snapshot(), &wish(&[Preference::Luxury], Proximity::Anywhere)).unwrap();
        assert!(out.len() <= MAX_SUGGESTIONS);
        let names: Vec<_> = out.iter().map(|r| r.name()).collect();
        // First three survivors in store order
        assert_eq!(names, vec!["Verina", "Niriedes", "Delfini"]);
    }

    #[test]
    fn preferences_combine_with_and() {
        let out = suggest(
            &snapshot(),
            &wish(&[Preference::Luxury, Preference::Budget], Proximity::Anywhere),
        )
        .unwrap();
        let names: Vec<_> = out.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Delfini", "Anthousa"]);
    }

    #[test]
    fn proximity_restricts_to_the_allow_list() {
        let out = suggest(&snapshot(), &wish(&[Preference::Family], Proximity::NearPort)).unwrap();
        let names: Vec<_> = out.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Delfini"]);
    }

    #[test]
    fn beach_preference_accepts_description_mentions() {
        let inland = vec![stay("Thymari", "Exambela", 95.0, 4.1, &[])];
        let out = suggest(&inland, &wish(&[Preference::Beach], Proximity::Anywhere)).unwrap();
        assert!(out.is_empty());

        let mut with_beach_blurb = inland;
        if let Accommodation::Local(stay) = &mut with_beach_blurb[0] {
            stay.description = "Ten minutes' drive to the beach at Faros.".to_string();
        }
        let out = suggest(&with_beach_blurb, &wish(&[Preference::Beach], Proximity::Anywhere)).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn empty_result_is_ok_not_error() {
        let out = suggest(
            &snapshot(),
            &wish(&[Preference::Family], Proximity::AroundCapital),
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn flow_walks_idle_to_results_and_back() {
        let mut recommender = Recommender::new();
        assert_eq!(recommender.flow(), RecommendationFlow::Idle);

        recommender.begin();
        assert_eq!(recommender.flow(), RecommendationFlow::SelectingPreferences);

        let records = snapshot();
        recommender
            .search(&records, &wish(&[Preference::Luxury], Proximity::Anywhere))
            .unwrap();
        assert_eq!(recommender.flow(), RecommendationFlow::ResultsShown);

        recommender.reset();
        assert_eq!(recommender.flow(), RecommendationFlow::SelectingPreferences);
    }

    #[test]
    fn rejected_search_returns_to_preference_selection() {
        let mut recommender = Recommender::new();
        recommender.begin();
        let err = recommender
            .search(&snapshot(), &wish(&[], Proximity::Anywhere))
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::Validation(_)));
        assert_eq!(recommender.flow(), RecommendationFlow::SelectingPreferences);
    }
}
