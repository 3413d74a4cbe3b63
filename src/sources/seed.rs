use async_trait::async_trait;
use tracing::info;

use crate::error::SourceError;
use crate::models::{Accommodation, LocalStay, Photo};
use crate::sources::traits::StaySource;

/// Curated island records, used when the hosted store is not configured
/// and as fixtures in tests
pub struct SeedSource;

#[async_trait]
impl StaySource for SeedSource {
    async fn fetch(&self) -> Result<Vec<Accommodation>, SourceError> {
        info!("📋 Loading curated seed records");
        Ok(seed_records())
    }

    fn source_name(&self) -> &'static str {
        "curated seed"
    }
}

fn photo(url: &str, is_main: bool) -> Photo {
    Photo {
        url: url.to_string(),
        is_main,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Hand-authored snapshot in store order (rating descending)
pub fn seed_records() -> Vec<Accommodation> {
    vec![
        Accommodation::Local(LocalStay {
            id: "sif-verina".to_string(),
            name: "Verina Astra".to_string(),
            location: "Platis Gialos".to_string(),
            description: "Suites carved into the hillside above the beach, with private \
                          terraces facing the open Aegean."
                .to_string(),
            category_tags: strings(&["luxury", "boutique"]),
            price_per_night: 340.0,
            rating: 4.9,
            stars: Some(5),
            amenities: strings(&["Infinity pool", "Free WiFi", "Spa treatments", "Restaurant"]),
            photos: vec![
                photo("/photos/verina/terrace.jpg", true),
                photo("/photos/verina/pool.jpg", false),
            ],
        }),
        Accommodation::Local(LocalStay {
            id: "sif-niriedes".to_string(),
            name: "Villa Niriedes".to_string(),
            location: "Platis Gialos".to_string(),
            description: "Family-run villas a short walk from the longest beach on the \
                          island. Kitchenettes in every unit."
                .to_string(),
            category_tags: strings(&["villas", "family-friendly"]),
            price_per_night: 185.0,
            rating: 4.8,
            stars: Some(4),
            amenities: strings(&["Free WiFi", "Private parking", "Sea view terrace"]),
            photos: vec![
                photo("/photos/niriedes/garden.jpg", true),
                photo("/photos/niriedes/room.jpg", false),
            ],
        }),
        Accommodation::Local(LocalStay {
            id: "sif-kamaroti".to_string(),
            name: "Kamaroti Suites".to_string(),
            location: "Kamares".to_string(),
            description: "Quiet suites in a garden setting, ten minutes on foot from the \
                          ferry port and the beach at Kamares."
                .to_string(),
            category_tags: strings(&["boutique"]),
            price_per_night: 150.0,
            rating: 4.7,
            stars: Some(4),
            amenities: strings(&["Swimming pool", "Free WiFi", "Breakfast restaurant"]),
            photos: vec![photo("/photos/kamaroti/suite.jpg", true)],
        }),
        Accommodation::Local(LocalStay {
            id: "sif-delfini".to_string(),
            name: "Delfini Rooms".to_string(),
            location: "Kamares".to_string(),
            description: "Simple rooms right on the port promenade. Families keep coming \
                          back for the shallow, sandy beach."
                .to_string(),
            category_tags: strings(&["family-friendly", "budget"]),
            price_per_night: 95.0,
            rating: 4.5,
            stars: Some(2),
            amenities: strings(&["Free WiFi", "Beachfront location"]),
            photos: vec![photo("/photos/delfini/facade.jpg", true)],
        }),
        Accommodation::Local(LocalStay {
            id: "sif-petali".to_string(),
            name: "Petali Village".to_string(),
            location: "Apollonia".to_string(),
            description: "Traditional Cycladic buildings overlooking the capital, with a \
                          view across the valley to the sea."
                .to_string(),
            category_tags: strings(&["traditional"]),
            price_per_night: 120.0,
            rating: 4.4,
            stars: Some(3),
            amenities: strings(&["Swimming pool", "Restaurant", "Free internet corner"]),
            photos: vec![photo("/photos/petali/view.jpg", true)],
        }),
        Accommodation::Local(LocalStay {
            id: "sif-windmill".to_string(),
            name: "Windmill Bella Vista".to_string(),
            location: "Artemonas".to_string(),
            description: "A restored windmill and studios on the ridge between Artemonas \
                          and the capital."
                .to_string(),
            category_tags: strings(&["traditional", "boutique"]),
            price_per_night: 140.0,
            rating: 4.3,
            stars: None,
            amenities: strings(&["Free WiFi", "Massage room"]),
            photos: vec![photo("/photos/windmill/mill.jpg", true)],
        }),
        Accommodation::Local(LocalStay {
            id: "sif-gialos".to_string(),
            name: "Gialos Seaside Studios".to_string(),
            location: "Vathi".to_string(),
            description: "Studios on the sand in the sheltered bay of Vathi. Tavernas and \
                          the beach are at the doorstep."
                .to_string(),
            category_tags: strings(&["budget", "family-friendly"]),
            price_per_night: 80.0,
            rating: 4.1,
            stars: Some(2),
            amenities: strings(&["Beachfront location", "Parking nearby"]),
            photos: vec![photo("/photos/gialos/bay.jpg", true)],
        }),
        Accommodation::Local(LocalStay {
            id: "sif-kastro".to_string(),
            name: "Kastro Traditional House".to_string(),
            location: "Kastro".to_string(),
            description: "A stone house inside the medieval village, steps from the \
                          church of the Seven Martyrs."
                .to_string(),
            category_tags: strings(&["traditional"]),
            price_per_night: 70.0,
            rating: 3.9,
            stars: None,
            amenities: strings(&["Free WiFi"]),
            photos: vec![photo("/photos/kastro/house.jpg", true)],
        }),
    ]
}
