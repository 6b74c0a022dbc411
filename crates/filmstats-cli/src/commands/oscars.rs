use crate::output::Output;
use crate::render;
use crate::OscarCommands;
use color_eyre::eyre::Context;
use color_eyre::Result;
use filmstats_core::FilmQueries;

pub async fn run_oscars(cmd: OscarCommands, queries: &FilmQueries, output: &Output) -> Result<()> {
    tracing::debug!("Oscars command started");

    match cmd {
        OscarCommands::Overview => {
            let overview = queries.oscars_overview().await.wrap_err("Failed to compute Oscars overview")?;
            render::oscars_overview(&overview, output)
        }
        OscarCommands::All => {
            let films = queries.all_oscars().await.wrap_err("Failed to fetch all Oscars")?;
            render::documents(&films, output)
        }
        OscarCommands::Film { title } => {
            let films = queries
                .oscars_by_film(&title)
                .await
                .wrap_err("Failed to fetch Oscars by film title")?;
            render::documents(&films, output)
        }
        OscarCommands::Category { category } => {
            let entries = queries
                .oscars_by_category(&category)
                .await
                .wrap_err("Failed to fetch Oscars by category")?;
            render::oscar_entries(&entries, output)
        }
        OscarCommands::Year { year } => {
            let entries = queries
                .oscars_by_year(&year)
                .await
                .wrap_err("Failed to fetch Oscars by year of the film")?;
            render::oscar_entries(&entries, output)
        }
        OscarCommands::Winner { status } => {
            let entries = queries
                .oscars_by_winner(&status)
                .await
                .wrap_err("Failed to fetch Oscars by winner status")?;
            render::oscar_entries(&entries, output)
        }
        OscarCommands::Top { limit } => {
            let top = queries.top_films_by_wins(&limit).await.wrap_err("Failed to fetch top films")?;
            render::ranking(&top, ["Film", "Wins"], |t| (t.title.clone(), t.total_wins), output)
        }
        OscarCommands::Nominations { limit } => {
            let top = queries
                .top_films_by_nominations(&limit)
                .await
                .wrap_err("Failed to fetch top nominated films")?;
            render::ranking(
                &top,
                ["Nominee", "Nominations"],
                |t| (t.label.clone(), t.total_nominations),
                output,
            )
        }
        OscarCommands::Categories => {
            let categories = queries
                .distinct_categories()
                .await
                .wrap_err("Failed to fetch Oscar categories")?;
            render::strings(&categories, "Category", output)
        }
        OscarCommands::Sample => {
            let sample = queries.sample_films().await.wrap_err("Database connection failed")?;
            output.success(format!("Store '{}' is answering", queries.store_name()));
            render::documents(&sample, output)
        }
    }
}
