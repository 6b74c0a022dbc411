use serde::{Deserialize, Serialize};

/// Films ranked by number of Oscar wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilmWins {
    pub title: String,
    pub total_wins: u64,
}

/// Nominee labels ranked by number of nominations, won or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NominationTally {
    pub label: String,
    pub total_nominations: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CriticTally {
    pub critic_name: String,
    #[serde(rename = "totalReviews")]
    pub total_reviews: u64,
}

/// Films ranked by how many different critics reviewed them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilmCriticCount {
    pub movie_title: String,
    #[serde(rename = "criticsCount")]
    pub critics_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: String,
    pub route: String,
    pub description: String,
}

impl RouteInfo {
    pub fn get(route: &str, description: &str) -> Self {
        Self {
            method: "GET".to_string(),
            route: route.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OscarsOverview {
    pub message: String,
    pub total_entries: u64,
    pub total_categories: u64,
    pub total_winners: u64,
    pub available_routes: Vec<RouteInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsOverview {
    pub message: String,
    pub total_reviews: u64,
    pub total_critics: u64,
    pub total_top_critic_reviews: u64,
    pub available_routes: Vec<RouteInfo>,
}
