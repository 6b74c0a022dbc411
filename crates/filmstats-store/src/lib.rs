pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::{Collection, DocumentStore};
