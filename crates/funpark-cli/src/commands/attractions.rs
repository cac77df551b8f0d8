//! Attractions command handler for listing the catalog.

use std::io;

use anyhow::Result;

use funpark_cli::output::{render_attractions, OutputFormat};
use funpark_lib::Park;

/// Handle the attractions subcommand.
///
/// Lists open attractions in catalog order, or every attraction when
/// `include_closed` is set.
pub fn handle_attractions(park: &Park, include_closed: bool, format: OutputFormat) -> Result<()> {
    let attractions = park.list_attractions(include_closed);
    render_attractions(&mut io::stdout().lock(), &attractions, format)?;
    Ok(())
}
