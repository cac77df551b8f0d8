//! Toggle command handler for flipping an attraction's operational status.

use std::io;

use anyhow::Result;

use funpark_cli::output::{render_status, OutputFormat};
use funpark_lib::Park;

/// Handle the toggle subcommand.
///
/// The new status only lasts for this invocation; use `--open`/`--close` to
/// adjust statuses for other commands.
pub fn handle_toggle(park: &Park, attraction: &str, format: OutputFormat) -> Result<()> {
    let open = park.toggle_status(attraction)?;
    render_status(&mut io::stdout().lock(), attraction, open, format)?;
    Ok(())
}
