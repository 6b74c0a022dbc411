use filmstats_store::StoreError;
use thiserror::Error;

/// Failure kinds surfaced by the query façade.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The store could not produce a collection (missing, malformed, or timed out)
    #[error("data unavailable: {0}")]
    Unavailable(#[from] StoreError),

    #[error("invalid {name} parameter {value:?}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("no document found for '{0}'")]
    NotFound(String),
}
