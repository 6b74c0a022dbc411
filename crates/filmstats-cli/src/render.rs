// Result rendering: tables for humans, the serialized value for JSON output.

use color_eyre::Result;
use comfy_table::{presets, modifiers, Attribute, Cell, Color, Table};
use filmstats_models::{OscarEntry, OscarsOverview, ReviewEntry, ReviewsOverview, RouteInfo};
use serde::Serialize;

use crate::output::Output;

fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold)),
    );
    table
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Print `data` as JSON in machine formats, or hand it to `human` otherwise.
fn emit<T, F>(data: &T, output: &Output, human: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(),
{
    if output.is_human() {
        human();
    } else {
        output.result(&serde_json::to_value(data)?);
    }
    Ok(())
}

/// Whole documents have no fixed columns; humans get pretty JSON too.
pub fn documents<T: Serialize>(docs: &[T], output: &Output) -> Result<()> {
    output.result(&serde_json::to_value(docs)?);
    output.info(format!("{} document(s)", docs.len()));
    Ok(())
}

pub fn document<T: Serialize>(doc: &T, output: &Output) -> Result<()> {
    output.result(&serde_json::to_value(doc)?);
    Ok(())
}

pub fn strings(values: &[String], header: &str, output: &Output) -> Result<()> {
    emit(values, output, || {
        let mut t = table(&[header]);
        for value in values {
            t.add_row(vec![value.as_str()]);
        }
        output.table(&t);
        output.info(format!("{} value(s)", values.len()));
    })
}

/// Rank, name, metric rows for any top-N result.
pub fn ranking<T: Serialize>(
    data: &[T],
    headers: [&str; 2],
    row: impl Fn(&T) -> (String, u64),
    output: &Output,
) -> Result<()> {
    emit(data, output, || {
        let mut t = table(&["#", headers[0], headers[1]]);
        for (position, item) in data.iter().enumerate() {
            let (name, metric) = row(item);
            t.add_row(vec![(position + 1).to_string(), name, metric.to_string()]);
        }
        output.table(&t);
        if data.is_empty() {
            output.info("No results");
        }
    })
}

pub fn oscar_entries(entries: &[OscarEntry], output: &Output) -> Result<()> {
    emit(entries, output, || {
        let mut t = table(&["Film", "Category", "Year", "Winner", "Nominee"]);
        for entry in entries {
            t.add_row(vec![
                entry.movie_title.clone(),
                entry.nomination.category.clone(),
                entry.nomination.year_film.to_string(),
                yes_no(entry.nomination.winner).to_string(),
                entry.nomination.film.clone(),
            ]);
        }
        output.table(&t);
        output.info(format!("{} nomination(s)", entries.len()));
    })
}

pub fn review_entries(entries: &[ReviewEntry], output: &Output) -> Result<()> {
    emit(entries, output, || {
        let mut t = table(&["Film", "Critic", "Publisher", "Top critic", "Date"]);
        for entry in entries {
            t.add_row(vec![
                entry.movie_title.clone(),
                entry.review.critic().unwrap_or("-").to_string(),
                entry.review.publisher_name.clone(),
                yes_no(entry.review.top_critic).to_string(),
                entry.review.review_date.clone(),
            ]);
        }
        output.table(&t);
        output.info(format!("{} review(s)", entries.len()));
    })
}

fn routes_table(routes: &[RouteInfo]) -> Table {
    let mut t = table(&["Method", "Route", "Description"]);
    for route in routes {
        t.add_row(vec![route.method.as_str(), route.route.as_str(), route.description.as_str()]);
    }
    t
}

pub fn oscars_overview(overview: &OscarsOverview, output: &Output) -> Result<()> {
    emit(overview, output, || {
        let mut t = table(&[overview.message.as_str(), ""]);
        t.add_row(vec!["Total entries".to_string(), overview.total_entries.to_string()]);
        t.add_row(vec!["Total categories".to_string(), overview.total_categories.to_string()]);
        t.add_row(vec!["Total winners".to_string(), overview.total_winners.to_string()]);
        output.table(&t);
        output.table(&routes_table(&overview.available_routes));
    })
}

pub fn reviews_overview(overview: &ReviewsOverview, output: &Output) -> Result<()> {
    emit(overview, output, || {
        let mut t = table(&[overview.message.as_str(), ""]);
        t.add_row(vec!["Total reviews".to_string(), overview.total_reviews.to_string()]);
        t.add_row(vec!["Distinct critics".to_string(), overview.total_critics.to_string()]);
        t.add_row(vec![
            "Top-critic reviews".to_string(),
            overview.total_top_critic_reviews.to_string(),
        ]);
        output.table(&t);
        output.table(&routes_table(&overview.available_routes));
    })
}
