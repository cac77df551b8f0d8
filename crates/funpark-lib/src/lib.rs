//! FunPark library entry points.
//!
//! This crate models a theme park as a weighted location graph, answers
//! shortest-path and traversal queries over it, and recommends the nearest
//! open attraction matching a category and thrill filter. Higher-level
//! consumers (the CLI) should only depend on the items exported here instead
//! of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod graph;
pub mod park;
pub mod path;
pub mod recommend;
mod suggest;

pub use catalog::{Attraction, AttractionCatalog, AttractionSummary};
pub use error::{Error, Result};
pub use graph::{Edge, LocationGraph, LocationGraphBuilder};
pub use park::{AttractionRecord, Park, ParkConfig, PathRecord};
pub use path::{shortest_path, traverse, Distance, Route};
pub use recommend::{find_nearest, NearestQuery, Recommendation};
