pub mod config;
pub mod paths;

pub use config::{Config, LoggingConfig, StoreConfig};
pub use paths::{container_base_path, PathManager};
