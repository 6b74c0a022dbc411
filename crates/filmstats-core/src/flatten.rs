// Nested-list expansion: every element of a document's embedded list becomes an
// independent record paired with its parent document.

use filmstats_models::{FilmOscars, FilmReviews, OscarEntry, ReviewEntry};

/// Lazily pair each element of `list(doc)` with its parent, in document then list order.
/// Documents with an empty list contribute nothing.
pub fn flatten<'a, D, E, F>(documents: &'a [D], list: F) -> impl Iterator<Item = (&'a D, &'a E)> + 'a
where
    D: 'a,
    E: 'a,
    F: Fn(&'a D) -> &'a [E] + 'a,
{
    documents
        .iter()
        .flat_map(move |doc| list(doc).iter().map(move |element| (doc, element)))
}

pub fn oscar_entries(films: &[FilmOscars]) -> impl Iterator<Item = OscarEntry> + '_ {
    flatten(films, |film| film.oscars.as_slice())
        .map(|(film, nomination)| OscarEntry::new(film, nomination))
}

pub fn review_entries(films: &[FilmReviews]) -> impl Iterator<Item = ReviewEntry> + '_ {
    flatten(films, |film| film.reviews.as_slice())
        .map(|(film, review)| ReviewEntry::new(film, review))
}
