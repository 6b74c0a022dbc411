// Flattened records: one per element of a film's embedded list, carrying the
// parent film's key fields alongside the element's own fields.

use serde::{Deserialize, Serialize};

use crate::film::{FilmOscars, Nomination};
use crate::review::{FilmReviews, Review};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OscarEntry {
    pub movie_title: String,
    #[serde(flatten)]
    pub nomination: Nomination,
}

impl OscarEntry {
    pub fn new(film: &FilmOscars, nomination: &Nomination) -> Self {
        Self {
            movie_title: film.movie_title.clone(),
            nomination: nomination.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewEntry {
    pub movie_title: String,
    pub rotten_tomatoes_link: String,
    #[serde(flatten)]
    pub review: Review,
}

impl ReviewEntry {
    pub fn new(film: &FilmReviews, review: &Review) -> Self {
        Self {
            movie_title: film.movie_title.clone(),
            rotten_tomatoes_link: film.rotten_tomatoes_link.clone(),
            review: review.clone(),
        }
    }
}
