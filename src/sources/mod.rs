pub mod live;
pub mod seed;
pub mod store;
pub mod traits;
pub mod types;

pub use live::{LiveSearchClient, LiveSearchConfig};
pub use seed::{seed_records, SeedSource};
pub use store::{StoreClient, StoreConfig};
pub use traits::StaySource;
pub use types::StaySearchParams;

use crate::models::Accommodation;

/// Merge the curated and live result sets into one snapshot.
///
/// Local records come first; the relative order within each set is left
/// exactly as the source returned it.
pub fn merge_snapshots(
    local: Vec<Accommodation>,
    live: Vec<Accommodation>,
) -> Vec<Accommodation> {
    let mut merged = local;
    merged.extend(live);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LivePricing, LiveStay, LocalStay, Provenance};

    #[test]
    fn merge_keeps_local_first_and_source_order() {
        let local = vec![
            Accommodation::Local(LocalStay {
                id: "l1".to_string(),
                name: "First".to_string(),
                location: "Apollonia".to_string(),
                description: String::new(),
                category_tags: vec![],
                price_per_night: 100.0,
                rating: 4.5,
                stars: None,
                amenities: vec![],
                photos: vec![],
            }),
            Accommodation::Local(LocalStay {
                id: "l2".to_string(),
                name: "Second".to_string(),
                location: "Kamares".to_string(),
                description: String::new(),
                category_tags: vec![],
                price_per_night: 90.0,
                rating: 4.0,
                stars: None,
                amenities: vec![],
                photos: vec![],
            }),
        ];
        let live = vec![Accommodation::ThirdParty(LiveStay {
            id: "b1".to_string(),
            name: "Third".to_string(),
            location: "Faros".to_string(),
            description: None,
            review_score: 8.0,
            stars: None,
            price_per_night: 130.0,
            amenities: vec![],
            has_wifi: false,
            has_pool: false,
            has_parking: false,
            pricing: LivePricing {
                base_rate: 130.0,
                discount_percent: None,
                available: true,
            },
            photos: vec![],
        })];

        let merged = merge_snapshots(local, live);
        let names: Vec<_> = merged.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert_eq!(merged[2].provenance(), Provenance::ThirdParty);
    }
}
