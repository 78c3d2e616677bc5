use geo::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GeoError;

/// Point-of-interest category shown as a filter badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hospital,
    School,
    Church,
    Mall,
}

impl Category {
    /// Badge order used by the sidebar
    pub const ALL: [Category; 4] = [
        Category::Hospital,
        Category::School,
        Category::Church,
        Category::Mall,
    ];

    /// Tag string as it appears in authored data
    pub fn tag(self) -> &'static str {
        match self {
            Category::Hospital => "hospital",
            Category::School => "school",
            Category::Church => "church",
            Category::Mall => "mall",
        }
    }

    /// Plural heading for a group of places
    pub fn label(self) -> &'static str {
        match self {
            Category::Hospital => "Hospitals",
            Category::School => "Schools",
            Category::Church => "Churches",
            Category::Mall => "Malls",
        }
    }
}

impl FromStr for Category {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.tag() == tag)
            .ok_or_else(|| GeoError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A nearby place with precomputed travel distances
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub name: String,
    pub category: Category,
    /// Opaque display labels, e.g. "2.8 km"
    pub walk_distance: String,
    pub car_distance: String,
    /// x = longitude, y = latitude (WGS84 degrees)
    pub coordinates: Coord<f64>,
}

impl Place {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        walk_distance: impl Into<String>,
        car_distance: impl Into<String>,
        (lon, lat): (f64, f64),
    ) -> Self {
        Self {
            name: name.into(),
            category,
            walk_distance: walk_distance.into(),
            car_distance: car_distance.into(),
            coordinates: Coord { x: lon, y: lat },
        }
    }
}
