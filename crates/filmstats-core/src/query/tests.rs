use super::*;
use async_trait::async_trait;
use filmstats_models::{CriticTally, FilmCriticCount, FilmWins, Nomination, Review};
use filmstats_store::MemoryStore;
use serde_json::Map;

fn nomination(category: &str, year_film: i64, winner: bool, film: &str) -> Nomination {
    Nomination {
        category: category.to_string(),
        year_film,
        winner,
        film: film.to_string(),
    }
}

fn review(critic: Option<&str>, publisher: &str, top_critic: bool, date: &str) -> Review {
    Review {
        critic_name: critic.map(str::to_string),
        publisher_name: publisher.to_string(),
        top_critic,
        review_date: date.to_string(),
        extra: Map::new(),
    }
}

fn film_oscars(title: &str, oscars: Vec<Nomination>) -> FilmOscars {
    FilmOscars {
        movie_title: title.to_string(),
        oscars,
    }
}

fn film_reviews(title: &str, reviews: Vec<Review>) -> FilmReviews {
    FilmReviews {
        movie_title: title.to_string(),
        rotten_tomatoes_link: format!("m/{}", title.to_lowercase().replace(' ', "_")),
        reviews,
    }
}

fn oscars_fixture() -> Vec<FilmOscars> {
    vec![
        film_oscars(
            "Citizen Kane",
            vec![
                nomination("OUTSTANDING MOTION PICTURE", 1941, false, "Citizen Kane"),
                nomination("WRITING (Original Screenplay)", 1941, true, "Citizen Kane"),
                nomination("ACTOR", 1941, false, "Orson Welles"),
            ],
        ),
        film_oscars(
            "Casablanca",
            vec![
                nomination("OUTSTANDING MOTION PICTURE", 1943, true, "Casablanca"),
                nomination("DIRECTING", 1943, true, "Michael Curtiz"),
                nomination("ACTOR", 1943, false, "Humphrey Bogart"),
            ],
        ),
        film_oscars("Citizen Ruth", vec![]),
        film_oscars(
            "The Maltese Falcon",
            vec![
                nomination("OUTSTANDING MOTION PICTURE", 1941, false, "The Maltese Falcon"),
                nomination("ACTOR IN A SUPPORTING ROLE", 1941, false, "Sydney Greenstreet"),
            ],
        ),
    ]
}

fn reviews_fixture() -> Vec<FilmReviews> {
    vec![
        film_reviews(
            "Heat",
            vec![
                review(Some("Janet Maslin"), "The New York Times", true, "2020-01-01"),
                review(Some("Roger Ebert"), "Chicago Sun-Times", true, "2021-06-15"),
                review(Some("Roger Ebert"), "Chicago Sun-Times", true, "2019-03-03"),
                review(None, "Times Higher", false, ""),
            ],
        ),
        film_reviews(
            "Alien",
            vec![
                review(Some("Roger Ebert"), "Chicago Sun-Times", true, "2018-02-02"),
                review(Some(""), "Variety", false, "2017-07-07"),
                review(Some(""), "Variety", false, "2017-07-08"),
            ],
        ),
        film_reviews("Empty", vec![]),
    ]
}

fn queries() -> FilmQueries {
    let store = MemoryStore::new(oscars_fixture(), reviews_fixture());
    FilmQueries::new(Arc::new(store))
}

/// Store whose every read fails, as if the connection were lost.
struct OfflineStore;

#[async_trait]
impl DocumentStore for OfflineStore {
    fn store_name(&self) -> &str {
        "offline"
    }

    async fn read_films(&self) -> Result<Vec<FilmOscars>, StoreError> {
        Err(StoreError::unavailable("Films", "connection refused"))
    }

    async fn read_film_reviews(&self) -> Result<Vec<FilmReviews>, StoreError> {
        Err(StoreError::unavailable("FilmReviews", "connection refused"))
    }
}

/// Store that never answers.
struct HangingStore;

#[async_trait]
impl DocumentStore for HangingStore {
    fn store_name(&self) -> &str {
        "hanging"
    }

    fn collection_name(&self, collection: Collection) -> &str {
        match collection {
            Collection::Films => "Oscars",
            Collection::FilmReviews => "Reviews",
        }
    }

    async fn read_films(&self) -> Result<Vec<FilmOscars>, StoreError> {
        std::future::pending().await
    }

    async fn read_film_reviews(&self) -> Result<Vec<FilmReviews>, StoreError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_oscars_overview_counts() {
    let overview = queries().oscars_overview().await.unwrap();
    assert_eq!(overview.total_entries, 4);
    // OUTSTANDING MOTION PICTURE, WRITING, ACTOR, DIRECTING, ACTOR IN A SUPPORTING ROLE
    assert_eq!(overview.total_categories, 5);
    assert_eq!(overview.total_winners, 3);
    assert_eq!(overview.available_routes.len(), OSCAR_ROUTES.len());
    assert!(overview.available_routes.iter().all(|r| r.method == "GET"));
}

#[tokio::test]
async fn test_all_oscars_returns_snapshot() {
    let all = queries().all_oscars().await.unwrap();
    assert_eq!(all, oscars_fixture());
}

#[tokio::test]
async fn test_oscars_by_film_is_case_insensitive_substring() {
    let q = queries();
    let lower = q.oscars_by_film("citizen").await.unwrap();
    let upper = q.oscars_by_film("CITIZEN").await.unwrap();
    assert_eq!(lower, upper);
    let titles: Vec<&str> = lower.iter().map(|f| f.movie_title.as_str()).collect();
    assert_eq!(titles, vec!["Citizen Kane", "Citizen Ruth"]);

    assert_eq!(q.oscars_by_film("falcon").await.unwrap().len(), 1);
    assert!(q.oscars_by_film("(").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_oscars_by_category_returns_flattened_entries() {
    let entries = queries().oscars_by_category("actor").await.unwrap();
    let labels: Vec<&str> = entries.iter().map(|e| e.nomination.film.as_str()).collect();
    assert_eq!(labels, vec!["Orson Welles", "Humphrey Bogart", "Sydney Greenstreet"]);
    assert_eq!(entries[2].movie_title, "The Maltese Falcon");
}

#[tokio::test]
async fn test_oscars_by_year() {
    let q = queries();
    let entries = q.oscars_by_year("1941").await.unwrap();
    assert_eq!(entries.len(), 5);
    assert!(entries.iter().all(|e| e.nomination.year_film == 1941));

    assert!(q.oscars_by_year("1900").await.unwrap().is_empty());
    assert!(q.oscars_by_year("nineteen").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_oscars_by_winner() {
    let q = queries();
    assert_eq!(q.oscars_by_winner("true").await.unwrap().len(), 3);
    assert_eq!(q.oscars_by_winner("false").await.unwrap().len(), 5);
    assert!(q.oscars_by_winner("maybe").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_top_films_by_wins() {
    let q = queries();
    let top = q.top_films_by_wins("10").await.unwrap();
    assert_eq!(
        top,
        vec![
            FilmWins { title: "Casablanca".to_string(), total_wins: 2 },
            FilmWins { title: "Citizen Kane".to_string(), total_wins: 1 },
        ]
    );
}

#[tokio::test]
async fn test_top_films_by_wins_single_film_scenario() {
    let store = MemoryStore::default().with_films(vec![film_oscars(
        "Amadeus",
        vec![
            nomination("BEST PICTURE", 1984, true, "Amadeus"),
            nomination("ACTOR", 1984, false, "Tom Hulce"),
            nomination("EDITING", 1984, false, "Amadeus"),
        ],
    )]);
    let top = FilmQueries::new(Arc::new(store)).top_films_by_wins("1").await.unwrap();
    assert_eq!(top, vec![FilmWins { title: "Amadeus".to_string(), total_wins: 1 }]);
}

#[tokio::test]
async fn test_top_films_by_nominations_groups_by_label_with_stable_ties() {
    let top = queries().top_films_by_nominations("3").await.unwrap();
    let got: Vec<(&str, u64)> = top.iter().map(|t| (t.label.as_str(), t.total_nominations)).collect();
    // every label appears once except "Citizen Kane" (twice); ties keep first-seen order
    assert_eq!(got, vec![("Citizen Kane", 2), ("Orson Welles", 1), ("Casablanca", 1)]);
}

#[tokio::test]
async fn test_invalid_limit_returns_empty() {
    let q = queries();
    assert!(q.top_films_by_wins("abc").await.unwrap().is_empty());
    assert!(q.top_films_by_wins("0").await.unwrap().is_empty());
    assert!(q.top_films_by_wins("-2").await.unwrap().is_empty());
    assert!(q.top_films_by_nominations("abc").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_distinct_categories_sorted() {
    let categories = queries().distinct_categories().await.unwrap();
    assert_eq!(
        categories,
        vec![
            "ACTOR",
            "ACTOR IN A SUPPORTING ROLE",
            "DIRECTING",
            "OUTSTANDING MOTION PICTURE",
            "WRITING (Original Screenplay)",
        ]
    );
}

#[tokio::test]
async fn test_sample_films_caps_at_sample_size() {
    let many: Vec<FilmOscars> = (0..15).map(|i| film_oscars(&format!("Film {}", i), vec![])).collect();
    let q = FilmQueries::new(Arc::new(MemoryStore::default().with_films(many)));
    let sample = q.sample_films().await.unwrap();
    assert_eq!(sample.len(), SAMPLE_SIZE);
    assert_eq!(sample[0].movie_title, "Film 0");
}

#[tokio::test]
async fn test_reviews_overview_counts() {
    let overview = queries().reviews_overview().await.unwrap();
    assert_eq!(overview.total_reviews, 7);
    // Janet Maslin, Roger Ebert, the null name and the empty name
    assert_eq!(overview.total_critics, 4);
    assert_eq!(overview.total_top_critic_reviews, 4);
    assert_eq!(overview.available_routes.len(), REVIEW_ROUTES.len());
}

#[tokio::test]
async fn test_unnamed_critics_count_in_overview_but_not_in_ranking() {
    let store = MemoryStore::default().with_film_reviews(vec![film_reviews(
        "Alien",
        vec![
            review(None, "Variety", false, "2017-07-07"),
            review(None, "Empire", false, "2017-07-08"),
            review(Some(""), "Variety", false, "2017-07-09"),
        ],
    )]);
    let q = FilmQueries::new(Arc::new(store));

    assert_eq!(q.reviews_overview().await.unwrap().total_critics, 2);
    assert!(q.top_critics().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reviews_by_film_exact_title() {
    let q = queries();
    let heat = q.reviews_by_film("Heat").await.unwrap();
    assert_eq!(heat.reviews.len(), 4);
    assert_eq!(heat.rotten_tomatoes_link, "m/heat");

    assert!(matches!(q.reviews_by_film("heat").await, Err(QueryError::NotFound(t)) if t == "heat"));
}

#[tokio::test]
async fn test_reviews_by_publisher_substring() {
    let matched = queries().reviews_by_publisher("times").await.unwrap();
    let publishers: Vec<&str> = matched.iter().map(|e| e.review.publisher_name.as_str()).collect();
    assert_eq!(
        publishers,
        vec![
            "The New York Times",
            "Chicago Sun-Times",
            "Chicago Sun-Times",
            "Times Higher",
            "Chicago Sun-Times",
        ]
    );
    assert_eq!(matched[0].movie_title, "Heat");
}

#[tokio::test]
async fn test_reviews_by_top_critic() {
    let q = queries();
    assert_eq!(q.reviews_by_top_critic("true").await.unwrap().len(), 4);
    assert_eq!(q.reviews_by_top_critic("false").await.unwrap().len(), 3);
    assert!(q.reviews_by_top_critic("1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_latest_reviews_newest_first() {
    let store = MemoryStore::default().with_film_reviews(vec![film_reviews(
        "Heat",
        vec![
            review(Some("A"), "P", false, "2020-01-01"),
            review(Some("B"), "P", false, "2021-06-15"),
            review(Some("C"), "P", false, "2019-03-03"),
        ],
    )]);
    let latest = FilmQueries::new(Arc::new(store)).latest_reviews().await.unwrap();
    let dates: Vec<&str> = latest.iter().map(|e| e.review.review_date.as_str()).collect();
    assert_eq!(dates, vec!["2021-06-15", "2020-01-01", "2019-03-03"]);
}

#[tokio::test]
async fn test_latest_reviews_limit_and_undated_last() {
    let latest = queries().latest_reviews().await.unwrap();
    assert_eq!(latest.len(), 7);
    assert_eq!(latest[0].review.review_date, "2021-06-15");
    assert_eq!(latest[6].review.review_date, "");

    let many: Vec<Review> = (1..=12)
        .map(|day| review(Some("X"), "P", false, &format!("2022-01-{:02}", day)))
        .collect();
    let store = MemoryStore::default().with_film_reviews(vec![film_reviews("Many", many)]);
    let latest = FilmQueries::new(Arc::new(store)).latest_reviews().await.unwrap();
    assert_eq!(latest.len(), LATEST_REVIEWS_LIMIT as usize);
    assert_eq!(latest[0].review.review_date, "2022-01-12");
    assert_eq!(latest[9].review.review_date, "2022-01-03");
}

#[tokio::test]
async fn test_top_critics_excludes_missing_and_empty_names() {
    let top = queries().top_critics().await.unwrap();
    assert_eq!(
        top,
        vec![
            CriticTally { critic_name: "Roger Ebert".to_string(), total_reviews: 3 },
            CriticTally { critic_name: "Janet Maslin".to_string(), total_reviews: 1 },
        ]
    );
}

#[tokio::test]
async fn test_top_reviewed_films_counts_distinct_critics() {
    let top = queries().top_reviewed_films().await.unwrap();
    // Heat: Maslin, Ebert, null -> 3; Alien: Ebert, "" -> 2; Empty has no reviews
    assert_eq!(
        top,
        vec![
            FilmCriticCount { movie_title: "Heat".to_string(), critics_count: 3 },
            FilmCriticCount { movie_title: "Alien".to_string(), critics_count: 2 },
        ]
    );
}

#[tokio::test]
async fn test_results_serialize_to_wire_shape() {
    let top = queries().top_critics().await.unwrap();
    let json = serde_json::to_value(&top).unwrap();
    assert_eq!(json[0]["critic_name"], "Roger Ebert");
    assert_eq!(json[0]["totalReviews"], 3);
}

#[tokio::test]
async fn test_unavailable_store_is_an_error_not_empty() {
    let q = FilmQueries::new(Arc::new(OfflineStore));
    assert!(matches!(q.oscars_overview().await, Err(QueryError::Unavailable(_))));
    assert!(matches!(q.top_films_by_wins("abc").await, Err(QueryError::Unavailable(_))));
    assert!(matches!(q.latest_reviews().await, Err(QueryError::Unavailable(_))));
    assert!(matches!(q.reviews_by_film("Heat").await, Err(QueryError::Unavailable(_))));
}

#[tokio::test]
async fn test_timeout_surfaces_as_unavailable() {
    let q = FilmQueries::new(Arc::new(HangingStore)).with_timeout(Duration::from_millis(20));
    match q.all_oscars().await {
        Err(QueryError::Unavailable(StoreError::Unavailable { collection, reason })) => {
            assert_eq!(collection, "Oscars");
            assert!(reason.contains("timed out"));
        }
        other => panic!("expected timeout, got {:?}", other),
    }
    match q.latest_reviews().await {
        Err(QueryError::Unavailable(StoreError::Unavailable { collection, .. })) => {
            assert_eq!(collection, "Reviews");
        }
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_queries_are_idempotent() {
    let q = queries();
    assert_eq!(q.top_critics().await.unwrap(), q.top_critics().await.unwrap());
    assert_eq!(
        q.oscars_by_category("picture").await.unwrap(),
        q.oscars_by_category("picture").await.unwrap()
    );
}
