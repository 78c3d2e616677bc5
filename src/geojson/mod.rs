//! GeoJSON feature source
//!
//! Only the geometry types the map draws are kept: Point, LineString,
//! MultiLineString and Polygon. Anything else is skipped with a warning.

use geo::Coord;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;

use crate::domain::{Feature, GeoFeature};
use crate::error::LoadError;

/// Raw GeoJSON document
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    coordinates: Value,
}

/// Features loaded from a GeoJSON `FeatureCollection`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let collection: Self = contents.parse()?;
        tracing::debug!(
            path = %path.display(),
            features = collection.len(),
            "loaded GeoJSON features"
        );
        Ok(collection)
    }

    /// First feature whose display name matches exactly
    pub fn find(&self, name: &str) -> Option<&Feature> {
        self.features
            .iter()
            .find(|f| f.name.as_deref() == Some(name))
    }

    pub fn geometries(&self) -> impl Iterator<Item = &GeoFeature> {
        self.features.iter().map(|f| &f.geometry)
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.geometry.is_polygon())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromStr for FeatureCollection {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawDocument = serde_json::from_str(s)?;
        if raw.type_ != "FeatureCollection" {
            return Err(LoadError::UnsupportedDocument(raw.type_));
        }

        let features = raw
            .features
            .into_iter()
            .enumerate()
            .filter_map(|(index, feature)| parse_feature(index, feature))
            .collect();

        Ok(Self { features })
    }
}

fn parse_feature(index: usize, raw: RawFeature) -> Option<Feature> {
    let name = raw.properties.as_ref().and_then(display_name);

    let Some(geometry) = raw.geometry else {
        tracing::warn!(index, ?name, "skipping feature without geometry");
        return None;
    };

    let parsed = match geometry.type_.as_str() {
        "Point" => coords::<Vec<f64>>(geometry.coordinates)
            .and_then(|p| position(&p))
            .map(GeoFeature::Point),
        "LineString" => coords::<Vec<Vec<f64>>>(geometry.coordinates)
            .and_then(|line| path(&line))
            .map(GeoFeature::LineString),
        "MultiLineString" => coords::<Vec<Vec<Vec<f64>>>>(geometry.coordinates)
            .and_then(|lines| lines.iter().map(|l| path(l)).collect::<Option<Vec<_>>>())
            .map(GeoFeature::MultiLineString),
        "Polygon" => coords::<Vec<Vec<Vec<f64>>>>(geometry.coordinates).and_then(|rings| {
            if rings.len() > 1 {
                tracing::debug!(index, ?name, holes = rings.len() - 1, "dropping polygon holes");
            }
            rings.first().and_then(|outer| path(outer)).map(GeoFeature::Polygon)
        }),
        other => {
            tracing::warn!(index, ?name, kind = other, "skipping unsupported geometry");
            return None;
        }
    };

    match parsed {
        Some(geometry) => Some(Feature::new(name, geometry)),
        None => {
            tracing::warn!(index, ?name, kind = %geometry.type_, "skipping malformed coordinates");
            None
        }
    }
}

/// `text` property, falling back to `name`
fn display_name(properties: &Map<String, Value>) -> Option<String> {
    ["text", "name"]
        .iter()
        .find_map(|key| properties.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn coords<T: serde::de::DeserializeOwned>(value: Value) -> Option<T> {
    serde_json::from_value(value).ok()
}

/// GeoJSON position [lon, lat, (alt)]
fn position(values: &[f64]) -> Option<Coord<f64>> {
    match values {
        [x, y, ..] => Some(Coord { x: *x, y: *y }),
        _ => None,
    }
}

fn path(points: &[Vec<f64>]) -> Option<Vec<Coord<f64>>> {
    points.iter().map(|p| position(p)).collect()
}
