// Named-field access for documents and flattened records.

use filmstats_models::{FilmOscars, FilmReviews, OscarEntry, ReviewEntry};

use crate::filter::{FieldValue, Record};

pub mod fields {
    pub const MOVIE_TITLE: &str = "movie_title";
    pub const ROTTEN_TOMATOES_LINK: &str = "rotten_tomatoes_link";

    pub const CATEGORY: &str = "category";
    pub const YEAR_FILM: &str = "year_film";
    pub const WINNER: &str = "winner";
    pub const FILM: &str = "film";

    pub const CRITIC_NAME: &str = "critic_name";
    pub const PUBLISHER_NAME: &str = "publisher_name";
    pub const TOP_CRITIC: &str = "top_critic";
    pub const REVIEW_DATE: &str = "review_date";
}

use fields::*;

impl Record for FilmOscars {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            MOVIE_TITLE => FieldValue::Text(&self.movie_title),
            _ => FieldValue::Missing,
        }
    }
}

impl Record for FilmReviews {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            MOVIE_TITLE => FieldValue::Text(&self.movie_title),
            ROTTEN_TOMATOES_LINK => FieldValue::Text(&self.rotten_tomatoes_link),
            _ => FieldValue::Missing,
        }
    }
}

impl Record for OscarEntry {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            MOVIE_TITLE => FieldValue::Text(&self.movie_title),
            CATEGORY => FieldValue::Text(&self.nomination.category),
            YEAR_FILM => FieldValue::Int(self.nomination.year_film),
            WINNER => FieldValue::Bool(self.nomination.winner),
            FILM => FieldValue::Text(&self.nomination.film),
            _ => FieldValue::Missing,
        }
    }
}

impl Record for ReviewEntry {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            MOVIE_TITLE => FieldValue::Text(&self.movie_title),
            ROTTEN_TOMATOES_LINK => FieldValue::Text(&self.rotten_tomatoes_link),
            CRITIC_NAME => self
                .review
                .critic_name
                .as_deref()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Missing),
            PUBLISHER_NAME => FieldValue::Text(&self.review.publisher_name),
            TOP_CRITIC => FieldValue::Bool(self.review.top_critic),
            REVIEW_DATE => FieldValue::Text(&self.review.review_date),
            _ => FieldValue::Missing,
        }
    }
}
