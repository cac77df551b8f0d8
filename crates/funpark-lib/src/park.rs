//! Static park configuration and the assembled [`Park`].
//!
//! A park is described once at startup: its locations, the walking paths
//! between them, and the attractions bound to those locations. The built-in
//! layout is used unless a JSON file with the same structure is supplied.

use std::fs;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{AttractionCatalog, AttractionSummary};
use crate::error::{Error, Result};
use crate::graph::LocationGraph;
use crate::path::{shortest_path, traverse, Route};
use crate::recommend::{find_nearest, NearestQuery, Recommendation};

/// Bidirectional walking path between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathRecord {
    pub from: String,
    pub to: String,
    pub distance: u64,
}

/// Attraction entry as written in park configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttractionRecord {
    pub name: String,
    pub location: String,
    pub categories: Vec<String>,
    pub thrill: u8,
    /// Initial operational status; attractions are closed unless listed open.
    #[serde(default)]
    pub open: bool,
}

/// Complete static description of a park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParkConfig {
    pub locations: Vec<String>,
    #[serde(default)]
    pub paths: Vec<PathRecord>,
    #[serde(default)]
    pub attractions: Vec<AttractionRecord>,
}

static BUILTIN_PARK: Lazy<ParkConfig> = Lazy::new(builtin_config);

impl ParkConfig {
    /// The default FunPark layout.
    pub fn builtin() -> Self {
        BUILTIN_PARK.clone()
    }

    /// Load a JSON park description from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let config = Self::from_reader(file)?;
        debug!(path = %path.display(), "loaded park configuration");
        Ok(config)
    }

    /// Parse a JSON park description from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Check the configuration without keeping the built park.
    pub fn validate(&self) -> Result<()> {
        Park::from_config(self).map(|_| ())
    }

    fn build_graph(&self) -> Result<LocationGraph> {
        let mut builder = LocationGraph::builder();
        for location in &self.locations {
            builder.location(location.as_str())?;
        }
        for path in &self.paths {
            builder.path(&path.from, &path.to, path.distance)?;
        }
        Ok(builder.build())
    }
}

/// Location graph and attraction catalog of one park, answering every
/// navigation query.
#[derive(Debug)]
pub struct Park {
    graph: LocationGraph,
    catalog: AttractionCatalog,
}

impl Park {
    /// Build a park from validated configuration.
    pub fn from_config(config: &ParkConfig) -> Result<Self> {
        let graph = config.build_graph()?;
        let catalog = AttractionCatalog::from_records(&config.attractions)?;

        if let Some(orphan) = catalog
            .iter()
            .find(|attraction| !graph.contains(&attraction.location))
        {
            return Err(Error::UndeclaredAttractionLocation {
                attraction: orphan.name.clone(),
                location: orphan.location.clone(),
            });
        }

        info!(
            locations = graph.locations().len(),
            paths = graph.path_count(),
            attractions = catalog.len(),
            "park loaded"
        );
        Ok(Self { graph, catalog })
    }

    /// The default FunPark layout.
    pub fn builtin() -> Result<Self> {
        Self::from_config(&ParkConfig::builtin())
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn catalog(&self) -> &AttractionCatalog {
        &self.catalog
    }

    pub fn shortest_path(&self, origin: &str, destination: &str) -> Route {
        shortest_path(&self.graph, origin, destination)
    }

    pub fn traverse(&self, origin: &str) -> Vec<String> {
        traverse(&self.graph, origin)
    }

    pub fn list_attractions(&self, include_closed: bool) -> Vec<AttractionSummary> {
        self.catalog.list(include_closed)
    }

    pub fn find_nearest(&self, query: &NearestQuery) -> Option<Recommendation> {
        find_nearest(&self.graph, &self.catalog, query)
    }

    pub fn toggle_status(&self, attraction: &str) -> Result<bool> {
        self.catalog.toggle_status(attraction)
    }

    /// Resolve a location name, failing with suggestions when it is unknown.
    pub fn require_location(&self, name: &str) -> Result<()> {
        if self.graph.contains(name) {
            return Ok(());
        }
        Err(Error::UnknownLocation {
            name: name.to_string(),
            suggestions: self.graph.fuzzy_matches(name, 3),
        })
    }
}

fn builtin_config() -> ParkConfig {
    let locations = [
        "Pintu Masuk",
        "Lobby",
        "RollerCoaster",
        "Kincir Angin",
        "Rumah Hantu",
        "KidsZone",
        "FoodCourt",
        "AquaticShow",
        "VRCenter",
    ];
    let paths = [
        ("Pintu Masuk", "Lobby", 50),
        ("Lobby", "RollerCoaster", 120),
        ("Lobby", "Kincir Angin", 80),
        ("Lobby", "FoodCourt", 60),
        ("RollerCoaster", "Rumah Hantu", 150),
        ("Kincir Angin", "KidsZone", 100),
        ("Rumah Hantu", "VRCenter", 70),
        ("FoodCourt", "AquaticShow", 90),
        ("KidsZone", "AquaticShow", 140),
    ];
    let attractions: [(&str, &[&str], u8, bool); 6] = [
        ("RollerCoaster", &["ekstrem"], 9, true),
        ("Kincir Angin", &["keluarga", "pemandangan"], 3, true),
        // Closed for maintenance.
        ("Rumah Hantu", &["horor", "ekstrem"], 7, false),
        ("KidsZone", &["anak", "edu"], 2, true),
        ("AquaticShow", &["pertunjukan", "keluarga"], 2, true),
        ("VRCenter", &["virtual", "edu"], 5, true),
    ];

    ParkConfig {
        locations: locations.iter().map(|name| name.to_string()).collect(),
        paths: paths
            .iter()
            .map(|&(from, to, distance)| PathRecord {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            })
            .collect(),
        attractions: attractions
            .iter()
            .map(|&(name, categories, thrill, open)| AttractionRecord {
                name: name.to_string(),
                location: name.to_string(),
                categories: categories.iter().map(|c| c.to_string()).collect(),
                thrill,
                open,
            })
            .collect(),
    }
}
