use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection could not be read at all (missing file, lost connection, ...)
    #[error("collection '{collection}' is unavailable: {reason}")]
    Unavailable { collection: String, reason: String },

    #[error("collection '{collection}' contains a malformed document: {reason}")]
    Malformed { collection: String, reason: String },
}

impl StoreError {
    pub fn unavailable(collection: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unavailable {
            collection: collection.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(collection: impl Into<String>, reason: impl ToString) -> Self {
        Self::Malformed {
            collection: collection.into(),
            reason: reason.to_string(),
        }
    }
}
