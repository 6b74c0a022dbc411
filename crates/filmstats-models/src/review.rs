use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::nullable::{list_or_empty, string_or_empty};

/// One document of the `FilmReviews` collection: a film and its critic reviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilmReviews {
    pub movie_title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub rotten_tomatoes_link: String,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default)]
    pub critic_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub publisher_name: String,
    #[serde(default)]
    pub top_critic: bool,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub review_date: String,
    /// Score, content and any other field we do not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Review {
    /// Critic name, treating an empty string the same as a missing one.
    pub fn critic(&self) -> Option<&str> {
        self.critic_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Parse `review_date` as a plain `YYYY-MM-DD` date or an RFC 3339 timestamp.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        let raw = self.review_date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.naive_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_dated(date: &str) -> Review {
        Review {
            critic_name: None,
            publisher_name: String::new(),
            top_critic: false,
            review_date: date.to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let raw = r#"{"critic_name":"A. O. Scott","publisher_name":"New York Times","top_critic":true,"review_date":"2010-02-09","review_score":"3/5","review_type":"Fresh"}"#;
        let review: Review = serde_json::from_str(raw).unwrap();
        assert_eq!(review.extra.get("review_score"), Some(&Value::from("3/5")));

        let back = serde_json::to_value(&review).unwrap();
        assert_eq!(back["review_type"], "Fresh");
        assert_eq!(back["critic_name"], "A. O. Scott");
    }

    #[test]
    fn test_critic_treats_empty_as_missing() {
        let mut review = review_dated("2020-01-01");
        assert_eq!(review.critic(), None);
        review.critic_name = Some(String::new());
        assert_eq!(review.critic(), None);
        review.critic_name = Some("Roger Ebert".to_string());
        assert_eq!(review.critic(), Some("Roger Ebert"));
    }

    #[test]
    fn test_parsed_date_formats() {
        assert!(review_dated("2021-06-15").parsed_date().is_some());
        assert!(review_dated("2021-06-15T10:30:00Z").parsed_date().is_some());
        assert!(review_dated("").parsed_date().is_none());
        assert!(review_dated("June 2021").parsed_date().is_none());

        let day = review_dated("2021-06-15").parsed_date().unwrap();
        let later = review_dated("2021-06-15T10:30:00Z").parsed_date().unwrap();
        assert!(later > day);
    }
}
