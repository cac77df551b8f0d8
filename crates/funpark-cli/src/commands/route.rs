//! Route command handler for computing paths between park locations.

use std::io;

use anyhow::Result;

use funpark_cli::output::{render_route, OutputFormat};
use funpark_lib::Park;

/// Handle the route subcommand.
///
/// An unknown location or a disconnected pair is not an error: the route is
/// reported as unavailable and the command still succeeds.
pub fn handle_route(park: &Park, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let route = park.shortest_path(from, to);
    render_route(&mut io::stdout().lock(), from, to, &route, format)?;
    Ok(())
}
