use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::graph::LocationGraph;

/// Total walking distance of a route.
///
/// `Unreachable` stands in for an infinite distance and orders after every
/// finite value, so the minimum over a set of distances is always the nearest
/// reachable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Finite distance, or `None` when unreachable.
    pub fn value(self) -> Option<u64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    /// Distance as a float, with `f64::INFINITY` for unreachable.
    pub fn as_f64(self) -> f64 {
        match self {
            Distance::Finite(value) => value as f64,
            Distance::Unreachable => f64::INFINITY,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_u64(*value),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub distance: Distance,
    pub steps: Vec<String>,
}

impl Route {
    /// The "no path" value: infinite distance and no steps.
    pub fn unreachable() -> Self {
        Self {
            distance: Distance::Unreachable,
            steps: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_reachable()
    }

    /// Number of paths walked along the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Find the shortest walking route between two locations with Dijkstra's
/// algorithm.
///
/// Unknown endpoints and disconnected pairs yield [`Route::unreachable`].
/// When several routes share the minimum distance any one of them may be
/// returned.
pub fn shortest_path(graph: &LocationGraph, origin: &str, destination: &str) -> Route {
    let (Some(start), Some(goal)) = (graph.key(origin), graph.key(destination)) else {
        debug!(origin, destination, "shortest path requested for unknown location");
        return Route::unreachable();
    };

    if start == goal {
        return Route {
            distance: Distance::Finite(0),
            steps: vec![start.to_string()],
        };
    }

    let mut finalized: HashMap<&str, u64> = HashMap::new();
    let mut tentative: HashMap<&str, u64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    tentative.insert(start, 0);
    queue.push(QueueEntry { node: start, cost: 0 });

    while let Some(entry) = queue.pop() {
        // Lazy deletion: the heap may still hold superseded entries.
        if let Some(&settled) = finalized.get(entry.node) {
            if settled <= entry.cost {
                continue;
            }
        }
        finalized.insert(entry.node, entry.cost);

        if entry.node == goal {
            debug!(
                origin,
                destination,
                distance = entry.cost,
                settled = finalized.len(),
                "shortest path found"
            );
            return Route {
                distance: Distance::Finite(entry.cost),
                steps: reconstruct_path(&parents, start, goal),
            };
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target.as_str();
            if finalized.contains_key(next) {
                continue;
            }

            let next_cost = entry.cost.saturating_add(edge.distance);
            if next_cost < tentative.get(next).copied().unwrap_or(u64::MAX) {
                tentative.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry {
                    node: next,
                    cost: next_cost,
                });
            }
        }
    }

    debug!(origin, destination, "no path between locations");
    Route::unreachable()
}

/// Breadth-first traversal from `origin`.
///
/// Every reachable location appears exactly once, in non-decreasing hop
/// distance; locations at the same depth follow neighbour declaration order.
/// An unknown origin is treated as an isolated node and yields just itself.
pub fn traverse(graph: &LocationGraph, origin: &str) -> Vec<String> {
    let Some(start) = graph.key(origin) else {
        return vec![origin.to_string()];
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());
        for edge in graph.neighbours(current) {
            let next = edge.target.as_str();
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    order
}

fn reconstruct_path(parents: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: u64,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
