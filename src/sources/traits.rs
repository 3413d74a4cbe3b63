use crate::error::SourceError;
use crate::models::Accommodation;
use async_trait::async_trait;

/// Common trait for all accommodation record sources
/// This allows easy addition of new providers in the future
#[async_trait]
pub trait StaySource: Send + Sync {
    /// Fetch a snapshot of records from the source
    async fn fetch(&self) -> Result<Vec<Accommodation>, SourceError>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
