use crate::output::Output;
use crate::render;
use crate::ReviewCommands;
use color_eyre::eyre::Context;
use color_eyre::Result;
use filmstats_core::{FilmQueries, QueryError};

pub async fn run_reviews(cmd: ReviewCommands, queries: &FilmQueries, output: &Output) -> Result<()> {
    tracing::debug!("Reviews command started");

    match cmd {
        ReviewCommands::Overview => {
            let overview = queries.reviews_overview().await.wrap_err("Failed to compute reviews overview")?;
            render::reviews_overview(&overview, output)
        }
        ReviewCommands::Film { title } => match queries.reviews_by_film(&title).await {
            Ok(film) => render::document(&film, output),
            Err(QueryError::NotFound(title)) => {
                output.warn(format!("No review document titled '{}'", title));
                if !output.is_human() {
                    output.result(&serde_json::Value::Null);
                }
                Ok(())
            }
            Err(e) => Err(e).wrap_err("Failed to fetch reviews by film title"),
        },
        ReviewCommands::Publisher { publisher } => {
            let entries = queries
                .reviews_by_publisher(&publisher)
                .await
                .wrap_err("Failed to fetch reviews by publisher")?;
            render::review_entries(&entries, output)
        }
        ReviewCommands::TopCritic { status } => {
            let entries = queries
                .reviews_by_top_critic(&status)
                .await
                .wrap_err("Failed to fetch reviews by top-critic status")?;
            render::review_entries(&entries, output)
        }
        ReviewCommands::Latest => {
            let entries = queries.latest_reviews().await.wrap_err("Failed to fetch latest reviews")?;
            render::review_entries(&entries, output)
        }
        ReviewCommands::Critics => {
            let top = queries.top_critics().await.wrap_err("Failed to get top 10 critics")?;
            render::ranking(&top, ["Critic", "Reviews"], |t| (t.critic_name.clone(), t.total_reviews), output)
        }
        ReviewCommands::Films => {
            let top = queries
                .top_reviewed_films()
                .await
                .wrap_err("Failed to get top 10 reviewed films")?;
            render::ranking(
                &top,
                ["Film", "Critics"],
                |t| (t.movie_title.clone(), t.critics_count),
                output,
            )
        }
    }
}
