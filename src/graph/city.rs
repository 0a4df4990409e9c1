use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::graph::Weight;
use crate::{Error, Result};

/// Identifier of a city on the map
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

/// A city: the node type of the map, positioned on an 800x500 canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: NodeId,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
        }
    }
}

/// An undirected road between two cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Road {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Static city map. Every road is checked against the city set on construction,
/// so adjacency building never has to re-validate.
#[derive(Debug, Clone, Serialize)]
pub struct CityMap {
    cities: Vec<City>,
    roads: Vec<Road>,
}

impl CityMap {
    /// Creates a validated map from city and road definitions
    pub fn new(cities: Vec<City>, roads: Vec<Road>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !ids.insert(&city.id) {
                return Err(Error::DuplicateNode(city.id.clone()));
            }
        }

        for road in &roads {
            for end in [&road.from, &road.to] {
                if !ids.contains(end) {
                    return Err(Error::UnknownNode(end.clone()));
                }
            }
            if road.from == road.to {
                return Err(Error::InvalidEdge(road.from.clone(), road.to.clone()));
            }
        }

        log::debug!("city map built: {} cities, {} roads", cities.len(), roads.len());
        Ok(Self { cities, roads })
    }

    /// The built-in seven-city map
    pub fn kota() -> Self {
        let cities = vec![
            City::new("A", "Kota A", 100.0, 250.0),
            City::new("B", "Kota B", 250.0, 100.0),
            City::new("C", "Kota C", 250.0, 400.0),
            City::new("D", "Kota D", 400.0, 250.0),
            City::new("E", "Kota E", 550.0, 100.0),
            City::new("F", "Kota F", 550.0, 400.0),
            City::new("G", "Kota G", 700.0, 250.0),
        ];
        let roads = vec![
            Road::new("A", "B", 4),
            Road::new("A", "C", 2),
            Road::new("B", "C", 1),
            Road::new("B", "D", 5),
            Road::new("C", "D", 8),
            Road::new("C", "F", 10),
            Road::new("D", "E", 3),
            Road::new("D", "F", 2),
            Road::new("E", "G", 1),
            Road::new("F", "G", 4),
        ];

        Self { cities, roads }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.city(id).is_some()
    }
}

impl Default for CityMap {
    fn default() -> Self {
        Self::kota()
    }
}
