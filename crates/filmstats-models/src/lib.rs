pub mod entry;
pub mod film;
pub mod review;
pub mod summary;

mod nullable;

pub use entry::{OscarEntry, ReviewEntry};
pub use film::{FilmOscars, Nomination};
pub use review::{FilmReviews, Review};
pub use summary::{
    CriticTally, FilmCriticCount, FilmWins, NominationTally, OscarsOverview, ReviewsOverview,
    RouteInfo,
};
