mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use funpark_cli::output::OutputFormat;
use funpark_lib::{Park, ParkConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "FunPark navigator: routes and attraction recommendations")]
struct Cli {
    /// Load the park layout from a JSON file instead of the built-in park.
    #[arg(long, env = "FUNPARK_PARK_FILE", global = true)]
    park: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Open an attraction before running the command (repeatable).
    #[arg(long = "open", value_name = "ATTRACTION", global = true)]
    open: Vec<String>,

    /// Close an attraction before running the command (repeatable).
    #[arg(long = "close", value_name = "ATTRACTION", global = true)]
    close: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List attractions; only open ones unless --all is given.
    Attractions {
        /// Include closed attractions.
        #[arg(long)]
        all: bool,
    },
    /// Compute the shortest walking route between two locations.
    Route {
        /// Starting location.
        #[arg(long = "from")]
        from: String,
        /// Destination location.
        #[arg(long = "to")]
        to: String,
    },
    /// Recommend the nearest open attraction matching the filters.
    Recommend {
        /// Visitor's current location.
        #[arg(long = "from")]
        from: String,
        /// Only consider attractions with this category label.
        #[arg(long)]
        category: Option<String>,
        /// Minimum thrill rating; ratings run 1-10, so values above 10 match nothing.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min_thrill: i32,
    },
    /// Flip an attraction between open and closed.
    Toggle {
        /// Attraction name.
        attraction: String,
    },
    /// List locations in breadth-first order from a starting location.
    Traverse {
        /// Starting location.
        #[arg(long = "from")]
        from: String,
    },
    /// List configured locations.
    Locations,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let park = load_park(cli.park.as_deref())?;
    apply_status_overrides(&park, &cli.open, &cli.close)?;

    let format = cli.format;
    match cli.command {
        Command::Attractions { all } => {
            commands::attractions::handle_attractions(&park, all, format)
        }
        Command::Route { from, to } => commands::route::handle_route(&park, &from, &to, format),
        Command::Recommend {
            from,
            category,
            min_thrill,
        } => commands::recommend::handle_recommend(&park, from, category, min_thrill, format),
        Command::Toggle { attraction } => commands::toggle::handle_toggle(&park, &attraction, format),
        Command::Traverse { from } => commands::traverse::handle_traverse(&park, &from, format),
        Command::Locations => commands::traverse::handle_locations(&park, format),
    }
}

fn load_park(path: Option<&Path>) -> Result<Park> {
    let config = match path {
        Some(path) => ParkConfig::from_path(path)
            .with_context(|| format!("failed to load park from {}", path.display()))?,
        None => {
            debug!("using built-in park layout");
            ParkConfig::builtin()
        }
    };
    Park::from_config(&config).context("invalid park configuration")
}

fn apply_status_overrides(park: &Park, open: &[String], close: &[String]) -> Result<()> {
    for name in open {
        park.catalog().set_status(name, true)?;
    }
    for name in close {
        park.catalog().set_status(name, false)?;
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
