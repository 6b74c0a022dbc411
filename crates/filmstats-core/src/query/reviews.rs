use filmstats_models::{CriticTally, FilmCriticCount, FilmReviews, ReviewEntry, ReviewsOverview, RouteInfo};
use std::collections::HashSet;
use tracing::info;

use super::params::{parse_status, recover};
use super::FilmQueries;
use crate::aggregate::group_by;
use crate::error::QueryError;
use crate::filter::{Condition, Filter};
use crate::flatten::review_entries;
use crate::rank::{top_n, RankOptions};
use crate::records::fields::{CRITIC_NAME, PUBLISHER_NAME, TOP_CRITIC};

pub const LATEST_REVIEWS_LIMIT: i64 = 10;
pub const TOP_CRITICS_LIMIT: i64 = 10;
pub const TOP_REVIEWED_FILMS_LIMIT: i64 = 10;

/// (route, description) pairs advertised by the reviews overview
pub const REVIEW_ROUTES: &[(&str, &str)] = &[
    ("/review/movie/:title", "Fetch the review document of a film by exact title"),
    ("/review/publisher/:publisher", "Fetch reviews by publisher"),
    ("/review/top_critic/:status", "Fetch reviews by top-critic status"),
    ("/review/last_review", "Fetch the 10 most recent reviews"),
    ("/review/critics/top-10", "Fetch the 10 critics with the most reviews"),
    ("/review/movies/top-10-reviewed", "Fetch the 10 films reviewed by the most critics"),
];

impl FilmQueries {
    /// Review count, distinct critic names and number of top-critic reviews.
    ///
    /// A missing name and an empty name each count as one distinct value; only
    /// the critic ranking drops them.
    pub async fn reviews_overview(&self) -> Result<ReviewsOverview, QueryError> {
        let films = self.film_reviews().await?;

        let total_reviews = review_entries(&films).count() as u64;
        let critics: HashSet<Option<String>> = review_entries(&films)
            .map(|entry| entry.review.critic_name)
            .collect();
        let top = Filter::new().and(Condition::equals(TOP_CRITIC, true));
        let total_top_critic_reviews = top.apply(review_entries(&films)).count() as u64;

        info!(
            operation = "reviews_overview",
            reviews = total_reviews,
            critics = critics.len(),
            top_critic_reviews = total_top_critic_reviews,
            "Computed reviews overview"
        );

        Ok(ReviewsOverview {
            message: "Welcome to the Review API".to_string(),
            total_reviews,
            total_critics: critics.len() as u64,
            total_top_critic_reviews,
            available_routes: REVIEW_ROUTES
                .iter()
                .map(|(route, description)| RouteInfo::get(route, description))
                .collect(),
        })
    }

    /// The review document whose title is exactly `title`.
    pub async fn reviews_by_film(&self, title: &str) -> Result<FilmReviews, QueryError> {
        let found = self.find_film_reviews(title).await?;
        info!(operation = "reviews_by_film", title, found = found.is_some(), "Looked up film reviews");
        found.ok_or_else(|| QueryError::NotFound(title.to_string()))
    }

    /// Reviews whose publisher contains `publisher`, ignoring case.
    pub async fn reviews_by_publisher(&self, publisher: &str) -> Result<Vec<ReviewEntry>, QueryError> {
        let films = self.film_reviews().await?;
        let filter = Filter::new().and(Condition::contains_ignore_case(PUBLISHER_NAME, publisher));
        let matched: Vec<ReviewEntry> = filter.apply(review_entries(&films)).collect();

        info!(
            operation = "reviews_by_publisher",
            publisher,
            results = matched.len(),
            "Searched reviews by publisher"
        );
        Ok(matched)
    }

    /// Reviews with the given top-critic flag (`"true"` or `"false"`).
    pub async fn reviews_by_top_critic(&self, status: &str) -> Result<Vec<ReviewEntry>, QueryError> {
        let films = self.film_reviews().await?;
        let Some(top_critic) = recover("reviews_by_top_critic", parse_status("status", status)) else {
            return Ok(Vec::new());
        };

        let filter = Filter::new().and(Condition::equals(TOP_CRITIC, top_critic));
        let matched: Vec<ReviewEntry> = filter.apply(review_entries(&films)).collect();

        info!(
            operation = "reviews_by_top_critic",
            top_critic,
            results = matched.len(),
            "Searched reviews by top-critic status"
        );
        Ok(matched)
    }

    /// The most recent reviews, newest first. Undated reviews sort last.
    pub async fn latest_reviews(&self) -> Result<Vec<ReviewEntry>, QueryError> {
        let films = self.film_reviews().await?;
        let entries: Vec<ReviewEntry> = review_entries(&films).collect();

        let latest = top_n(
            entries,
            |entry| entry.review.parsed_date(),
            RankOptions::top(LATEST_REVIEWS_LIMIT),
        );

        info!(operation = "latest_reviews", results = latest.len(), "Fetched latest reviews");
        Ok(latest)
    }

    /// Critics ranked by number of reviews; reviews without a critic name are ignored.
    pub async fn top_critics(&self) -> Result<Vec<CriticTally>, QueryError> {
        let films = self.film_reviews().await?;

        let named = Filter::new().and(Condition::present(CRITIC_NAME));
        let tallies = group_by(named.apply(review_entries(&films)), |entry| {
            entry.review.critic().unwrap_or_default().to_string()
        })
        .aggregate(|group| group.count());

        let ranked: Vec<CriticTally> = top_n(tallies, |(_, n)| *n, RankOptions::top(TOP_CRITICS_LIMIT))
            .into_iter()
            .map(|(critic_name, total_reviews)| CriticTally { critic_name, total_reviews })
            .collect();

        info!(operation = "top_critics", results = ranked.len(), "Ranked critics by reviews");
        Ok(ranked)
    }

    /// Films ranked by the number of distinct critics who reviewed them.
    pub async fn top_reviewed_films(&self) -> Result<Vec<FilmCriticCount>, QueryError> {
        let films = self.film_reviews().await?;

        let tallies = group_by(review_entries(&films), |entry| entry.movie_title.clone())
            .aggregate(|group| group.distinct_count(|entry| entry.review.critic_name.clone()));

        let ranked: Vec<FilmCriticCount> =
            top_n(tallies, |(_, n)| *n, RankOptions::top(TOP_REVIEWED_FILMS_LIMIT))
                .into_iter()
                .map(|(movie_title, critics_count)| FilmCriticCount { movie_title, critics_count })
                .collect();

        info!(operation = "top_reviewed_films", results = ranked.len(), "Ranked films by critics");
        Ok(ranked)
    }
}
