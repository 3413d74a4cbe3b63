use thiserror::Error;

/// Failures raised while talking to a record source.
///
/// Empty result sets are not failures; every variant here means the fetch
/// itself went wrong.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{source_name} request failed: {reason}")]
    Network {
        source_name: &'static str,
        reason: String,
    },

    #[error("{source_name} returned status {status}")]
    Status {
        source_name: &'static str,
        status: u16,
    },

    #[error("{source_name} returned an unreadable payload: {reason}")]
    Decode {
        source_name: &'static str,
        reason: String,
    },
}

impl SourceError {
    /// Classify a reqwest error into the network/decode split
    pub fn from_reqwest(source_name: &'static str, err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode {
                source_name,
                reason: err.to_string(),
            }
        } else {
            SourceError::Network {
                source_name,
                reason: err.to_string(),
            }
        }
    }
}

/// Top-level error taxonomy for discovery operations.
///
/// Both variants are local to the originating operation: callers log them
/// and keep whatever state they already had. There is no fatal class.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Rejected input, surfaced to the user without attempting the
    /// underlying operation
    #[error("{0}")]
    Validation(String),
}
