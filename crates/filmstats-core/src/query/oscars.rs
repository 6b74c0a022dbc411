use filmstats_models::{FilmOscars, FilmWins, NominationTally, OscarEntry, OscarsOverview, RouteInfo};
use std::collections::BTreeSet;
use tracing::info;

use super::params::{parse_integer, parse_status, recover};
use super::FilmQueries;
use crate::aggregate::group_by;
use crate::error::QueryError;
use crate::filter::{Condition, Filter};
use crate::flatten::oscar_entries;
use crate::rank::{top_n, RankOptions};
use crate::records::fields::{CATEGORY, MOVIE_TITLE, WINNER, YEAR_FILM};

/// Documents returned by the store connectivity check
pub const SAMPLE_SIZE: usize = 10;

/// (route, description) pairs advertised by the Oscars overview
pub const OSCAR_ROUTES: &[(&str, &str)] = &[
    ("/oscar/all", "Fetch all Oscar documents"),
    ("/oscar/film/:title", "Fetch Oscars by film title"),
    ("/oscar/category/:category", "Fetch Oscars by category"),
    ("/oscar/year_film/:year", "Fetch Oscars by year of the film"),
    ("/oscar/winner/:status", "Fetch Oscars by winner status"),
    ("/oscar/top/:limit", "Fetch top films by most Oscar wins"),
    ("/oscar/nominations/top/:limit", "Fetch top nominees by number of nominations"),
    ("/oscar/categories", "Fetch all distinct Oscar categories"),
    ("/oscar/test", "Fetch a sample of Oscar documents"),
];

impl FilmQueries {
    /// Document count, distinct categories and number of winning nominations.
    pub async fn oscars_overview(&self) -> Result<OscarsOverview, QueryError> {
        let films = self.films().await?;

        let categories: BTreeSet<String> = oscar_entries(&films)
            .map(|entry| entry.nomination.category)
            .collect();
        let winners = Filter::new().and(Condition::equals(WINNER, true));
        let total_winners = winners.apply(oscar_entries(&films)).count() as u64;

        info!(
            operation = "oscars_overview",
            films = films.len(),
            categories = categories.len(),
            winners = total_winners,
            "Computed Oscars overview"
        );

        Ok(OscarsOverview {
            message: "Welcome to the Oscar API".to_string(),
            total_entries: films.len() as u64,
            total_categories: categories.len() as u64,
            total_winners,
            available_routes: OSCAR_ROUTES
                .iter()
                .map(|(route, description)| RouteInfo::get(route, description))
                .collect(),
        })
    }

    pub async fn all_oscars(&self) -> Result<Vec<FilmOscars>, QueryError> {
        let films = self.films().await?;
        info!(operation = "all_oscars", results = films.len(), "Fetched all Oscar documents");
        Ok(films)
    }

    /// Film documents whose title contains `title`, ignoring case.
    pub async fn oscars_by_film(&self, title: &str) -> Result<Vec<FilmOscars>, QueryError> {
        let films = self.films().await?;
        let filter = Filter::new().and(Condition::contains_ignore_case(MOVIE_TITLE, title));
        let matched: Vec<FilmOscars> = filter.apply(films).collect();

        info!(operation = "oscars_by_film", title, results = matched.len(), "Searched Oscars by film");
        Ok(matched)
    }

    /// Nominations whose category contains `category`, ignoring case.
    pub async fn oscars_by_category(&self, category: &str) -> Result<Vec<OscarEntry>, QueryError> {
        let films = self.films().await?;
        let filter = Filter::new().and(Condition::contains_ignore_case(CATEGORY, category));
        let matched: Vec<OscarEntry> = filter.apply(oscar_entries(&films)).collect();

        info!(
            operation = "oscars_by_category",
            category,
            results = matched.len(),
            "Searched Oscars by category"
        );
        Ok(matched)
    }

    /// Nominations for films from `year`. A non-integer year matches nothing.
    pub async fn oscars_by_year(&self, year: &str) -> Result<Vec<OscarEntry>, QueryError> {
        let films = self.films().await?;
        let Some(year) = recover("oscars_by_year", parse_integer("year", year)) else {
            return Ok(Vec::new());
        };

        let filter = Filter::new().and(Condition::equals(YEAR_FILM, year));
        let matched: Vec<OscarEntry> = filter.apply(oscar_entries(&films)).collect();

        info!(operation = "oscars_by_year", year, results = matched.len(), "Searched Oscars by year");
        Ok(matched)
    }

    /// Nominations with the given winner flag (`"true"` or `"false"`).
    pub async fn oscars_by_winner(&self, status: &str) -> Result<Vec<OscarEntry>, QueryError> {
        let films = self.films().await?;
        let Some(winner) = recover("oscars_by_winner", parse_status("status", status)) else {
            return Ok(Vec::new());
        };

        let filter = Filter::new().and(Condition::equals(WINNER, winner));
        let matched: Vec<OscarEntry> = filter.apply(oscar_entries(&films)).collect();

        info!(
            operation = "oscars_by_winner",
            winner,
            results = matched.len(),
            "Searched Oscars by winner status"
        );
        Ok(matched)
    }

    /// Films ranked by number of winning nominations.
    pub async fn top_films_by_wins(&self, limit: &str) -> Result<Vec<FilmWins>, QueryError> {
        let films = self.films().await?;
        let Some(limit) = recover("top_films_by_wins", parse_integer("limit", limit)) else {
            return Ok(Vec::new());
        };

        let winners = Filter::new().and(Condition::equals(WINNER, true));
        let tallies = group_by(winners.apply(oscar_entries(&films)), |entry| {
            entry.movie_title.clone()
        })
        .aggregate(|group| group.count());

        let ranked: Vec<FilmWins> = top_n(tallies, |(_, wins)| *wins, RankOptions::top(limit))
            .into_iter()
            .map(|(title, total_wins)| FilmWins { title, total_wins })
            .collect();

        info!(operation = "top_films_by_wins", limit, results = ranked.len(), "Ranked films by wins");
        Ok(ranked)
    }

    /// Nominee labels ranked by number of nominations, won or not.
    pub async fn top_films_by_nominations(&self, limit: &str) -> Result<Vec<NominationTally>, QueryError> {
        let films = self.films().await?;
        let Some(limit) = recover("top_films_by_nominations", parse_integer("limit", limit)) else {
            return Ok(Vec::new());
        };

        let tallies = group_by(oscar_entries(&films), |entry| entry.nomination.film.clone())
            .aggregate(|group| group.count());

        let ranked: Vec<NominationTally> = top_n(tallies, |(_, n)| *n, RankOptions::top(limit))
            .into_iter()
            .map(|(label, total_nominations)| NominationTally { label, total_nominations })
            .collect();

        info!(
            operation = "top_films_by_nominations",
            limit,
            results = ranked.len(),
            "Ranked nominees by nominations"
        );
        Ok(ranked)
    }

    /// Every distinct nomination category, sorted.
    pub async fn distinct_categories(&self) -> Result<Vec<String>, QueryError> {
        let films = self.films().await?;
        let categories: Vec<String> = oscar_entries(&films)
            .map(|entry| entry.nomination.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        info!(operation = "distinct_categories", results = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// First few documents of the Films collection, to check the store answers.
    pub async fn sample_films(&self) -> Result<Vec<FilmOscars>, QueryError> {
        let mut films = self.films().await?;
        films.truncate(SAMPLE_SIZE);

        info!(
            operation = "sample_films",
            store = self.store_name(),
            results = films.len(),
            "Store connection is working"
        );
        Ok(films)
    }
}
