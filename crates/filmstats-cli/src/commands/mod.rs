pub mod config;
pub mod oscars;
pub mod reviews;

use color_eyre::Result;
use filmstats_config::{Config, PathManager};
use filmstats_core::FilmQueries;
use filmstats_store::JsonFileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Build the query façade over the configured JSON collection files.
/// `data_dir` (from `--data-dir`) overrides the configured directory.
pub fn build_queries(config: &Config, path_manager: &PathManager, data_dir: Option<PathBuf>) -> Result<FilmQueries> {
    let data_dir = data_dir
        .or_else(|| config.store.data_dir.clone())
        .unwrap_or_else(|| path_manager.data_dir().to_path_buf());

    if !data_dir.is_dir() {
        return Err(color_eyre::eyre::eyre!(
            "Data directory {} does not exist (set store.data_dir or pass --data-dir)",
            data_dir.display()
        ));
    }

    let store = JsonFileStore::new(&data_dir)
        .with_collection_names(&config.store.films_collection, &config.store.reviews_collection);

    debug!(
        data_dir = %data_dir.display(),
        films = %config.store.films_collection,
        reviews = %config.store.reviews_collection,
        timeout_secs = config.store.timeout_secs,
        "Opening JSON document store"
    );

    Ok(FilmQueries::new(Arc::new(store)).with_timeout(config.store.timeout()))
}
