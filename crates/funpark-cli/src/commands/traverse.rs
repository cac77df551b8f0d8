//! Traverse and locations command handlers.

use std::io;

use anyhow::Result;

use funpark_cli::output::{render_locations, render_traversal, OutputFormat};
use funpark_lib::Park;

/// Handle the traverse subcommand.
///
/// Unlike the library, which treats an unknown origin as an isolated node,
/// the CLI rejects it so typos surface with suggestions.
pub fn handle_traverse(park: &Park, from: &str, format: OutputFormat) -> Result<()> {
    park.require_location(from)?;
    let order = park.traverse(from);
    render_traversal(&mut io::stdout().lock(), from, &order, format)?;
    Ok(())
}

/// Handle the locations subcommand.
pub fn handle_locations(park: &Park, format: OutputFormat) -> Result<()> {
    render_locations(&mut io::stdout().lock(), park.graph().locations(), format)?;
    Ok(())
}
