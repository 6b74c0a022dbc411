//! Query façade: the named operations exposed to the CLI (or any other front end).
//!
//! Each operation reads a fresh snapshot from the [`DocumentStore`], then flattens,
//! filters, groups and ranks it synchronously. Nothing is cached between calls.

mod oscars;
mod params;
mod reviews;

#[cfg(test)]
mod tests;

use filmstats_models::{FilmOscars, FilmReviews};
use filmstats_store::{Collection, DocumentStore, StoreError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::error::QueryError;

pub use oscars::{OSCAR_ROUTES, SAMPLE_SIZE};
pub use reviews::{LATEST_REVIEWS_LIMIT, REVIEW_ROUTES, TOP_CRITICS_LIMIT, TOP_REVIEWED_FILMS_LIMIT};

#[derive(Clone)]
pub struct FilmQueries {
    store: Arc<dyn DocumentStore>,
    timeout: Option<Duration>,
}

impl FilmQueries {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store, timeout: None }
    }

    /// Fail reads that take longer than `timeout` with [`QueryError::Unavailable`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn store_name(&self) -> &str {
        self.store.store_name()
    }

    async fn films(&self) -> Result<Vec<FilmOscars>, QueryError> {
        self.fetch(Collection::Films, self.store.read_films()).await
    }

    async fn film_reviews(&self) -> Result<Vec<FilmReviews>, QueryError> {
        self.fetch(Collection::FilmReviews, self.store.read_film_reviews())
            .await
    }

    async fn find_film_reviews(&self, title: &str) -> Result<Option<FilmReviews>, QueryError> {
        self.fetch(Collection::FilmReviews, self.store.find_film_reviews(title))
            .await
    }

    async fn fetch<T, F>(&self, collection: Collection, read: F) -> Result<T, QueryError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let collection = self.store.collection_name(collection);
        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, read).await.unwrap_or_else(|_| {
                Err(StoreError::unavailable(
                    collection,
                    format!("read timed out after {:?}", timeout),
                ))
            }),
            None => read.await,
        };

        result.map_err(|e| {
            warn!(
                store = self.store.store_name(),
                collection,
                error = %e,
                "Store read failed"
            );
            QueryError::from(e)
        })
    }
}
