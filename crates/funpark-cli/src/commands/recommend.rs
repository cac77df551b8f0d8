//! Recommend command handler for the nearest matching attraction.

use std::io;

use anyhow::Result;

use funpark_cli::output::{render_recommendation, OutputFormat};
use funpark_lib::{NearestQuery, Park};

/// Handle the recommend subcommand.
pub fn handle_recommend(
    park: &Park,
    from: String,
    category: Option<String>,
    min_thrill: i32,
    format: OutputFormat,
) -> Result<()> {
    let query = NearestQuery {
        origin: from,
        // An empty --category means "any category".
        category: category.filter(|label| !label.trim().is_empty()),
        min_thrill,
    };
    let recommendation = park.find_nearest(&query);
    render_recommendation(&mut io::stdout().lock(), recommendation.as_ref(), format)?;
    Ok(())
}
