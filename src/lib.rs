//! Accommodation discovery core for a small-island listing site.
//!
//! Records come from two places: a hosted relational store with curated
//! properties, and a third-party booking search with live pricing. The
//! crate merges the two into a snapshot, runs the listing filter pipeline
//! over it (category, rating, location, amenity and price predicates plus
//! free-text search), and answers trip-preference recommendation queries
//! with up to three picks.

pub mod content;
pub mod engine;
pub mod error;
pub mod filter;
pub mod models;
pub mod recommend;
pub mod sources;

pub use engine::{DiscoveryEngine, Snapshot};
pub use error::{DiscoveryError, SourceError};
pub use filter::{Amenity, FilterState, PriceRange};
pub use models::{Accommodation, LiveStay, LocalStay, Photo, Provenance};
pub use recommend::{Preference, Proximity, Recommender, StayLength, TripWish};
pub use sources::{
    LiveSearchClient, LiveSearchConfig, SeedSource, StaySearchParams, StaySource, StoreClient,
    StoreConfig,
};
