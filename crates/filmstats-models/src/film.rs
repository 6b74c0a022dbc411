use serde::{Deserialize, Serialize};

use crate::nullable::{list_or_empty, string_or_empty};

/// One document of the `Films` collection: a film and every Oscar nomination it received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilmOscars {
    pub movie_title: String,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub oscars: Vec<Nomination>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nomination {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub category: String,
    #[serde(default)]
    pub year_film: i64,
    #[serde(default)]
    pub winner: bool,
    /// Nominee or work label (not always the film title)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub film: String,
}
