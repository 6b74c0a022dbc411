use async_trait::async_trait;
use filmstats_models::{FilmOscars, FilmReviews};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::StoreError;
use crate::traits::{Collection, DocumentStore};

/// Document store backed by one JSON file per collection.
///
/// `<data_dir>/<collection name>.json` holds either a JSON array of documents or
/// newline-delimited JSON (one document per line, as `mongoexport` writes by default).
/// Files are re-read on every call so queries always see the current contents.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    films_collection: String,
    reviews_collection: String,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            films_collection: Collection::Films.default_name().to_string(),
            reviews_collection: Collection::FilmReviews.default_name().to_string(),
        }
    }

    /// Override the collection names (file stems) used for each collection.
    pub fn with_collection_names(
        mut self,
        films: impl Into<String>,
        reviews: impl Into<String>,
    ) -> Self {
        self.films_collection = films.into();
        self.reviews_collection = reviews.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_dir
            .join(format!("{}.json", self.collection_name(collection)))
    }

    async fn read_collection<T>(&self, collection: Collection) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let name = self.collection_name(collection);
        let path = self.collection_path(collection);

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::unavailable(name, format!("{}: {}", path.display(), e)))?;

        let documents = parse_documents(name, &content)?;
        debug!(
            collection = name,
            documents = documents.len(),
            "Read collection from {}",
            path.display()
        );
        Ok(documents)
    }
}

/// Parse either a JSON array or newline-delimited JSON documents.
fn parse_documents<T>(collection: &str, content: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
{
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| StoreError::malformed(collection, e));
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| {
                StoreError::malformed(collection, format!("line {}: {}", index + 1, e))
            })
        })
        .collect()
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    fn store_name(&self) -> &str {
        "json-file"
    }

    fn collection_name(&self, collection: Collection) -> &str {
        match collection {
            Collection::Films => &self.films_collection,
            Collection::FilmReviews => &self.reviews_collection,
        }
    }

    async fn read_films(&self) -> Result<Vec<FilmOscars>, StoreError> {
        self.read_collection(Collection::Films).await
    }

    async fn read_film_reviews(&self) -> Result<Vec<FilmReviews>, StoreError> {
        self.read_collection(Collection::FilmReviews).await
    }
}
