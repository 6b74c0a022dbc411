use async_trait::async_trait;
use filmstats_models::{FilmOscars, FilmReviews};

use crate::error::StoreError;

/// The two collections the query engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// One document per film with its embedded Oscar nominations
    Films,
    /// One document per film with its embedded critic reviews
    FilmReviews,
}

impl Collection {
    pub fn default_name(&self) -> &'static str {
        match self {
            Collection::Films => "Films",
            Collection::FilmReviews => "FilmReviews",
        }
    }
}

/// Read-only handle to the film document store.
///
/// Every call returns a fresh snapshot of the current contents; implementations
/// must not cache results between calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // Store metadata
    fn store_name(&self) -> &str;

    /// Name this store uses for `collection` (file stem, table, ...).
    fn collection_name(&self, collection: Collection) -> &str {
        collection.default_name()
    }

    // Full snapshots
    async fn read_films(&self) -> Result<Vec<FilmOscars>, StoreError>;
    async fn read_film_reviews(&self) -> Result<Vec<FilmReviews>, StoreError>;

    /// Look up a single review document by its exact title.
    /// Stores with a keyed index should override the default snapshot scan.
    async fn find_film_reviews(&self, title: &str) -> Result<Option<FilmReviews>, StoreError> {
        Ok(self
            .read_film_reviews()
            .await?
            .into_iter()
            .find(|film| film.movie_title == title))
    }
}
