use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::DiscoveryError;
use crate::models::Accommodation;
use crate::sources::{merge_snapshots, StaySource};

/// The latest merged record set, with the time it was fetched
#[derive(Debug, Default)]
pub struct Snapshot {
    pub records: Vec<Accommodation>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Owns the record sources and the latest snapshot.
///
/// Each render cycle reads the current snapshot; `refresh` replaces it
/// only when the curated fetch succeeds, so a failed refresh leaves the
/// previously shown records in place. A live-search failure degrades to
/// curated-only results with a warning rather than failing the refresh.
pub struct DiscoveryEngine {
    local: Box<dyn StaySource>,
    live: Option<Box<dyn StaySource>>,
    snapshot: Snapshot,
}

impl DiscoveryEngine {
    pub fn new(local: Box<dyn StaySource>) -> Self {
        Self {
            local,
            live: None,
            snapshot: Snapshot::default(),
        }
    }

    pub fn with_live(mut self, live: Box<dyn StaySource>) -> Self {
        self.live = Some(live);
        self
    }

    pub fn records(&self) -> &[Accommodation] {
        &self.snapshot.records
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.fetched_at
    }

    /// Re-fetch from both sources concurrently and swap in the merged
    /// snapshot. Returns the new record count.
    pub async fn refresh(&mut self) -> Result<usize, DiscoveryError> {
        let (local, live) = match &self.live {
            Some(live_source) => {
                let (local, live) = tokio::join!(self.local.fetch(), live_source.fetch());
                let live = match live {
                    Ok(records) => records,
                    Err(err) => {
                        warn!("{} unavailable, showing curated results only: {}",
                            live_source.source_name(), err);
                        Vec::new()
                    }
                };
                (local?, live)
            }
            None => (self.local.fetch().await?, Vec::new()),
        };

        let merged = merge_snapshots(local, live);
        info!(
            "Snapshot refreshed from {}: {} records",
            self.local.source_name(),
            merged.len()
        );
        self.snapshot = Snapshot {
            records: merged,
            fetched_at: Some(Utc::now()),
        };
        Ok(self.snapshot.records.len())
    }
}
