//! Output formatting for park query results.
//!
//! Each `render_*` function writes either a human-readable text view or
//! pretty-printed JSON, depending on [`OutputFormat`].

use std::io::{self, Write};

use clap::ValueEnum;
use funpark_lib::{AttractionSummary, Distance, Recommendation, Route};
use serde::Serialize;

/// Presentation style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct RouteView<'a> {
    from: &'a str,
    to: &'a str,
    distance: Distance,
    route: &'a [String],
}

#[derive(Serialize)]
struct TraversalView<'a> {
    origin: &'a str,
    order: &'a [String],
}

#[derive(Serialize)]
struct StatusView<'a> {
    attraction: &'a str,
    open: bool,
}

fn status_label(open: bool) -> &'static str {
    if open {
        "Open"
    } else {
        "Closed"
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Render the attraction list.
pub fn render_attractions<W: Write>(
    out: &mut W,
    attractions: &[AttractionSummary],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, attractions);
    }

    if attractions.is_empty() {
        return writeln!(out, "No attractions available.");
    }

    writeln!(out, "Attractions ({}):", attractions.len())?;
    for attraction in attractions {
        writeln!(
            out,
            "- {} (location: {}) | categories: {} | thrill: {} | {}",
            attraction.name,
            attraction.location,
            attraction.categories.join(","),
            attraction.thrill,
            status_label(attraction.open)
        )?;
    }
    Ok(())
}

/// Render a shortest-path result, including the unreachable case.
pub fn render_route<W: Write>(
    out: &mut W,
    from: &str,
    to: &str,
    route: &Route,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(
            out,
            &RouteView {
                from,
                to,
                distance: route.distance,
                route: &route.steps,
            },
        );
    }

    match route.distance {
        Distance::Finite(distance) => writeln!(
            out,
            "Shortest distance: {}. Route: {}",
            distance,
            route.steps.join(" -> ")
        ),
        Distance::Unreachable => writeln!(out, "No route available from {from} to {to}."),
    }
}

/// Render the nearest-attraction recommendation, or the "nothing found" message.
pub fn render_recommendation<W: Write>(
    out: &mut W,
    recommendation: Option<&Recommendation>,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &recommendation);
    }

    match recommendation {
        Some(found) => {
            writeln!(
                out,
                "Nearest attraction: {} (distance {})",
                found.attraction, found.distance
            )?;
            writeln!(out, "Route: {}", found.route.join(" -> "))
        }
        None => writeln!(out, "No attraction matches the criteria."),
    }
}

/// Render the new status after a toggle.
pub fn render_status<W: Write>(
    out: &mut W,
    attraction: &str,
    open: bool,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &StatusView { attraction, open });
    }
    writeln!(out, "{attraction} is now {}", status_label(open))
}

/// Render a breadth-first traversal order.
pub fn render_traversal<W: Write>(
    out: &mut W,
    origin: &str,
    order: &[String],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &TraversalView { origin, order });
    }
    writeln!(out, "Traversal order: {}", order.join(" -> "))
}

/// Render the configured locations in declaration order.
pub fn render_locations<W: Write>(
    out: &mut W,
    locations: &[String],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, locations);
    }
    writeln!(out, "Locations ({}):", locations.len())?;
    for location in locations {
        writeln!(out, "- {location}")?;
    }
    Ok(())
}
