use std::collections::BTreeSet;

use chrono::{Duration, Utc};
use tracing::{info, warn, Level};
use tracing_subscriber;

use sifnos_scout::content;
use sifnos_scout::filter::{self, Amenity, FilterState};
use sifnos_scout::recommend::{Preference, Proximity, Recommender, StayLength, TripWish};
use sifnos_scout::sources::{
    LiveSearchClient, LiveSearchConfig, SeedSource, StaySearchParams, StaySource, StoreClient,
    StoreConfig,
};
use sifnos_scout::DiscoveryEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏖️ Sifnos Scout - Accommodation Discovery");
    info!("==========================================");
    info!("");

    // Clients are built here and handed to the engine; nothing below
    // reaches for a global.
    let local: Box<dyn StaySource> = match std::env::var("STORE_URL") {
        Ok(base_url) => {
            let mut config = StoreConfig::new(base_url);
            config.api_key = std::env::var("STORE_API_KEY").ok();
            Box::new(StoreClient::new(config)?)
        }
        Err(_) => {
            info!("STORE_URL not set, using the curated seed records");
            Box::new(SeedSource)
        }
    };

    let mut engine = DiscoveryEngine::new(local);

    if let Ok(base_url) = std::env::var("LIVE_SEARCH_URL") {
        let mut config = LiveSearchConfig::new(base_url);
        config.api_key = std::env::var("LIVE_SEARCH_API_KEY").ok();
        let today = Utc::now().date_naive();
        let params = StaySearchParams::new(
            "Sifnos",
            today + Duration::days(7),
            today + Duration::days(14),
        );
        engine = engine.with_live(Box::new(LiveSearchClient::new(config, params)?));
    }

    match engine.refresh().await {
        Ok(count) => info!("✅ Loaded {} accommodations", count),
        Err(err) => warn!("Refresh failed, keeping previous results: {}", err),
    }

    // Display results
    for (i, record) in engine.records().iter().enumerate() {
        println!(
            "{}. {} ({:.0} €/night)",
            i + 1,
            record.name(),
            record.price_per_night()
        );
        println!("   {} — rating {:.1}", record.location(), record.rating());
        if let Some(photo) = record.main_photo() {
            println!("   Photo: {}", photo.url);
        }
        if let Some(logo) = content::branding_override(record.id()) {
            println!("   Logo: {}", logo);
        }
        println!("   /hotels/{}", record.slug());
        println!();
    }

    // A sample filter pass: pool stays only
    let filters = FilterState {
        amenities: BTreeSet::from([Amenity::Pool]),
        ..FilterState::default()
    };
    let pool_stays = filter::apply(engine.records(), &filters, "");
    info!("{} of {} records have a pool", pool_stays.len(), engine.records().len());

    // A sample recommendation: beach trip, staying on the sand
    let wish = TripWish {
        preferences: BTreeSet::from([Preference::Beach]),
        stay_length: StayLength::Medium,
        proximity: Proximity::Beachfront,
    };
    let mut recommender = Recommender::new();
    recommender.begin();
    match recommender.search(engine.records(), &wish) {
        Ok(picks) if picks.is_empty() => info!("No stays matched the trip wish"),
        Ok(picks) => {
            info!("Suggested stays for a beach trip:");
            for pick in &picks {
                info!("  {} ({})", pick.name(), pick.location());
            }
        }
        Err(err) => warn!("Recommendation rejected: {}", err),
    }

    // Save the snapshot
    let json = serde_json::to_string_pretty(engine.records())?;
    tokio::fs::write("accommodations.json", json).await?;
    info!("💾 Saved snapshot to accommodations.json");

    Ok(())
}
