use async_trait::async_trait;
use filmstats_models::{FilmOscars, FilmReviews};

use crate::error::StoreError;
use crate::traits::DocumentStore;

/// In-memory document store, handy as a fixture or for embedding a fixed dataset.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    films: Vec<FilmOscars>,
    film_reviews: Vec<FilmReviews>,
}

impl MemoryStore {
    pub fn new(films: Vec<FilmOscars>, film_reviews: Vec<FilmReviews>) -> Self {
        Self { films, film_reviews }
    }

    pub fn with_films(mut self, films: Vec<FilmOscars>) -> Self {
        self.films = films;
        self
    }

    pub fn with_film_reviews(mut self, film_reviews: Vec<FilmReviews>) -> Self {
        self.film_reviews = film_reviews;
        self
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn store_name(&self) -> &str {
        "memory"
    }

    async fn read_films(&self) -> Result<Vec<FilmOscars>, StoreError> {
        Ok(self.films.clone())
    }

    async fn read_film_reviews(&self) -> Result<Vec<FilmReviews>, StoreError> {
        Ok(self.film_reviews.clone())
    }

    async fn find_film_reviews(&self, title: &str) -> Result<Option<FilmReviews>, StoreError> {
        Ok(self
            .film_reviews
            .iter()
            .find(|film| film.movie_title == title)
            .cloned())
    }
}
