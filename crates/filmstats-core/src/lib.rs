pub mod aggregate;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod query;
pub mod rank;
pub mod records;

pub use aggregate::{group_by, Group, Groups};
pub use error::QueryError;
pub use filter::{Condition, FieldValue, Filter, Record, Scalar};
pub use flatten::{flatten, oscar_entries, review_entries};
pub use query::FilmQueries;
pub use rank::{top_n, RankOptions};
