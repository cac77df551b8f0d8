use serde::Serialize;
use tracing::debug;

use crate::catalog::AttractionCatalog;
use crate::graph::LocationGraph;
use crate::path::{shortest_path, Distance};

/// Criteria for the "nearest attraction" query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NearestQuery {
    /// Location the visitor is standing at.
    pub origin: String,
    /// Only consider attractions carrying this category label.
    pub category: Option<String>,
    /// Minimum thrill rating. Any value at or below `1` accepts everything,
    /// anything above `10` accepts nothing.
    pub min_thrill: i32,
}

impl NearestQuery {
    /// Query without category or thrill filters.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_thrill(mut self, min_thrill: i32) -> Self {
        self.min_thrill = min_thrill;
        self
    }
}

/// Nearest eligible attraction and how to walk there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub attraction: String,
    pub distance: u64,
    pub route: Vec<String>,
}

/// Find the closest open attraction matching `query`.
///
/// Candidates are considered in catalog order and only a strictly shorter
/// distance replaces the current best, so the earliest attraction wins ties.
/// Returns `None` when nothing is eligible or nothing eligible is reachable.
pub fn find_nearest(
    graph: &LocationGraph,
    catalog: &AttractionCatalog,
    query: &NearestQuery,
) -> Option<Recommendation> {
    let category = query.category.as_deref();
    let mut best: Option<Recommendation> = None;
    let mut candidates = 0usize;

    for attraction in catalog.iter() {
        if !catalog.is_eligible(&attraction.name, category, query.min_thrill) {
            continue;
        }
        candidates += 1;

        let route = shortest_path(graph, &query.origin, &attraction.location);
        let Distance::Finite(distance) = route.distance else {
            continue;
        };
        if best.as_ref().map_or(true, |current| distance < current.distance) {
            best = Some(Recommendation {
                attraction: attraction.name.clone(),
                distance,
                route: route.steps,
            });
        }
    }

    debug!(
        origin = %query.origin,
        category = ?query.category,
        min_thrill = query.min_thrill,
        candidates,
        found = best.is_some(),
        "nearest attraction query finished"
    );
    best
}
