use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::suggest::similar_names;

/// Walking connection from one location to a neighbour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: String,
    pub distance: u64,
}

/// Undirected, weighted graph of park locations.
///
/// Every path is stored in both directions with the same distance. Neighbour
/// lists keep the order in which paths were declared, which fixes the visiting
/// order of breadth-first traversal.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    locations: Arc<Vec<String>>,
    adjacency: Arc<HashMap<String, Vec<Edge>>>,
}

impl LocationGraph {
    /// Start building a graph from static configuration.
    pub fn builder() -> LocationGraphBuilder {
        LocationGraphBuilder::default()
    }

    /// Return the neighbours of a location; unknown locations have none.
    pub fn neighbours(&self, location: &str) -> &[Edge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Walking distance of the direct path between two locations, if any.
    pub fn weight(&self, from: &str, to: &str) -> Option<u64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.distance)
    }

    /// Whether `location` is a declared node of the graph.
    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Declared locations in declaration order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Number of undirected paths in the graph.
    pub fn path_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Location names most similar to `name`, for "did you mean" hints.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        similar_names(self.locations.iter().map(String::as_str), name, limit)
    }

    /// Resolve a location name to the graph-owned key so searches can borrow
    /// from the graph instead of the caller's string.
    pub(crate) fn key(&self, location: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(location)
            .map(|(key, _)| key.as_str())
    }
}

/// Collects locations and paths, rejecting malformed configuration.
#[derive(Debug, Default)]
pub struct LocationGraphBuilder {
    locations: Vec<String>,
    adjacency: HashMap<String, Vec<Edge>>,
}

impl LocationGraphBuilder {
    /// Declare a location.
    pub fn location(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();
        if self.adjacency.contains_key(&name) {
            return Err(Error::DuplicateLocation { name });
        }
        self.adjacency.insert(name.clone(), Vec::new());
        self.locations.push(name);
        Ok(self)
    }

    /// Declare a bidirectional path between two already declared locations.
    pub fn path(&mut self, from: &str, to: &str, distance: u64) -> Result<&mut Self> {
        for endpoint in [from, to] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(Error::UndeclaredPathEndpoint {
                    from: from.to_string(),
                    to: to.to_string(),
                    missing: endpoint.to_string(),
                });
            }
        }
        if from == to {
            return Err(Error::SelfLoop {
                location: from.to_string(),
            });
        }
        if distance == 0 {
            return Err(Error::InvalidPathDistance {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if self.adjacency[from].iter().any(|edge| edge.target == to) {
            return Err(Error::DuplicatePath {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.push_edge(from, to, distance);
        self.push_edge(to, from, distance);
        Ok(self)
    }

    /// Finish construction.
    pub fn build(self) -> LocationGraph {
        LocationGraph {
            locations: Arc::new(self.locations),
            adjacency: Arc::new(self.adjacency),
        }
    }

    fn push_edge(&mut self, from: &str, to: &str, distance: u64) {
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(Edge {
                target: to.to_string(),
                distance,
            });
        }
    }
}
