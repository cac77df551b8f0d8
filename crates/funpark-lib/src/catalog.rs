//! Attraction metadata and operational status.
//!
//! Metadata is fixed once the catalog is built. Operational status is the only
//! mutable state and lives behind a lock owned by the catalog, so a shared
//! catalog can be read from many threads while toggles stay atomic.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::park::AttractionRecord;
use crate::suggest::similar_names;

const MIN_THRILL: u8 = 1;
const MAX_THRILL: u8 = 10;

/// Number of "did you mean" suggestions attached to lookup errors.
const SUGGESTION_LIMIT: usize = 3;

/// Immutable description of a single attraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attraction {
    pub name: String,
    /// Location the attraction is reached at.
    pub location: String,
    pub categories: HashSet<String>,
    /// Thrill rating in `1..=10`.
    pub thrill: u8,
}

impl Attraction {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Category labels in sorted order, for presentation.
    pub fn sorted_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.categories.iter().cloned().collect();
        categories.sort_unstable();
        categories
    }
}

/// Snapshot of an attraction together with its current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttractionSummary {
    pub name: String,
    pub location: String,
    pub categories: Vec<String>,
    pub thrill: u8,
    pub open: bool,
}

impl AttractionSummary {
    fn new(attraction: &Attraction, open: bool) -> Self {
        Self {
            name: attraction.name.clone(),
            location: attraction.location.clone(),
            categories: attraction.sorted_categories(),
            thrill: attraction.thrill,
            open,
        }
    }
}

/// Attractions in declaration order plus their open/closed flags.
#[derive(Debug, Default)]
pub struct AttractionCatalog {
    attractions: Vec<Attraction>,
    index: HashMap<String, usize>,
    status: RwLock<HashMap<String, bool>>,
}

impl AttractionCatalog {
    /// Build a catalog from configuration records.
    ///
    /// Rejects duplicate names, empty category sets and thrill ratings outside
    /// `1..=10`. Location bindings are not checked here; see
    /// [`crate::Park::from_config`].
    pub fn from_records(records: &[AttractionRecord]) -> Result<Self> {
        let mut attractions = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        let mut status = HashMap::with_capacity(records.len());

        for record in records {
            if index.contains_key(&record.name) {
                return Err(Error::DuplicateAttraction {
                    name: record.name.clone(),
                });
            }
            if record.categories.is_empty() {
                return Err(Error::EmptyCategories {
                    name: record.name.clone(),
                });
            }
            if !(MIN_THRILL..=MAX_THRILL).contains(&record.thrill) {
                return Err(Error::ThrillOutOfRange {
                    name: record.name.clone(),
                    thrill: record.thrill,
                });
            }

            index.insert(record.name.clone(), attractions.len());
            status.insert(record.name.clone(), record.open);
            attractions.push(Attraction {
                name: record.name.clone(),
                location: record.location.clone(),
                categories: record.categories.iter().cloned().collect(),
                thrill: record.thrill,
            });
        }

        Ok(Self {
            attractions,
            index,
            status: RwLock::new(status),
        })
    }

    /// Attractions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Attraction> {
        self.attractions.iter()
    }

    pub fn len(&self) -> usize {
        self.attractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Attraction> {
        self.index.get(name).map(|&idx| &self.attractions[idx])
    }

    /// Whether the attraction is currently open. Unknown names count as closed.
    pub fn is_open(&self, name: &str) -> bool {
        self.read_status().get(name).copied().unwrap_or(false)
    }

    /// Whether the attraction is known, open, carries `category` (when given)
    /// and rates at least `min_thrill`.
    pub fn is_eligible(&self, name: &str, category: Option<&str>, min_thrill: i32) -> bool {
        let Some(attraction) = self.get(name) else {
            return false;
        };
        self.is_open(name)
            && category.map_or(true, |label| attraction.has_category(label))
            && i32::from(attraction.thrill) >= min_thrill
    }

    /// Flip an attraction between open and closed, returning the new status.
    pub fn toggle_status(&self, name: &str) -> Result<bool> {
        let mut status = self.write_status();
        let Some(open) = status.get_mut(name) else {
            return Err(self.unknown(name));
        };
        *open = !*open;
        info!(attraction = name, open = *open, "attraction status toggled");
        Ok(*open)
    }

    /// Set an attraction's status explicitly, returning the new status.
    pub fn set_status(&self, name: &str, open: bool) -> Result<bool> {
        let mut status = self.write_status();
        let Some(current) = status.get_mut(name) else {
            return Err(self.unknown(name));
        };
        if *current != open {
            info!(attraction = name, open, "attraction status changed");
        }
        *current = open;
        Ok(open)
    }

    /// Summaries in declaration order, optionally skipping closed attractions.
    ///
    /// All statuses come from a single consistent snapshot.
    pub fn list(&self, include_closed: bool) -> Vec<AttractionSummary> {
        let status = self.read_status();
        self.attractions
            .iter()
            .map(|attraction| {
                let open = status.get(&attraction.name).copied().unwrap_or(false);
                AttractionSummary::new(attraction, open)
            })
            .filter(|summary| include_closed || summary.open)
            .collect()
    }

    /// Summary for a single attraction.
    pub fn summary(&self, name: &str) -> Result<AttractionSummary> {
        let attraction = self.get(name).ok_or_else(|| self.unknown(name))?;
        Ok(AttractionSummary::new(attraction, self.is_open(name)))
    }

    /// Attraction names most similar to `name`, for "did you mean" hints.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        similar_names(
            self.attractions.iter().map(|attraction| attraction.name.as_str()),
            name,
            limit,
        )
    }

    fn unknown(&self, name: &str) -> Error {
        Error::UnknownAttraction {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, SUGGESTION_LIMIT),
        }
    }

    // The guarded map only ever holds whole booleans, so a poisoned lock still
    // contains valid data.
    fn read_status(&self) -> RwLockReadGuard<'_, HashMap<String, bool>> {
        self.status.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_status(&self) -> RwLockWriteGuard<'_, HashMap<String, bool>> {
        self.status.write().unwrap_or_else(PoisonError::into_inner)
    }
}
