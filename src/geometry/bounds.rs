use geo::{Coord, Rect};
use serde::Serialize;

use crate::domain::{GeoFeature, Place};
use crate::error::{GeoError, GeoResult};

/// Axis-aligned box in WGS84 degrees
///
/// Starts empty and only ever grows. Longitudes are treated as plain numbers:
/// a box spanning the antimeridian is not representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    /// Create bounds from a set of points, `None` if there are none
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        let mut bounds = Self::empty();
        bounds.expand(points);
        (!bounds.is_empty()).then_some(bounds)
    }

    pub fn is_empty(&self) -> bool {
        self.min_lon > self.max_lon || self.min_lat > self.max_lat
    }

    /// Widen to include `point`; an empty box becomes that single point
    pub fn extend(self, point: Coord<f64>) -> Self {
        Self {
            min_lon: self.min_lon.min(point.x),
            min_lat: self.min_lat.min(point.y),
            max_lon: self.max_lon.max(point.x),
            max_lat: self.max_lat.max(point.y),
        }
    }

    /// Expand bounds to include another set of points
    pub fn expand<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        *self = points.into_iter().fold(*self, BoundingBox::extend);
    }

    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn to_rect(&self) -> Option<Rect<f64>> {
        if self.is_empty() {
            return None;
        }
        Some(Rect::new(
            Coord { x: self.min_lon, y: self.min_lat },
            Coord { x: self.max_lon, y: self.max_lat },
        ))
    }

    /// Grow by `padding` degrees on every side
    pub fn padded(&self, padding: f64) -> GeoResult<ClampRegion> {
        if self.is_empty() {
            return Err(GeoError::EmptyInput);
        }
        Ok(ClampRegion {
            south_west: Coord {
                x: self.min_lon - padding,
                y: self.min_lat - padding,
            },
            north_east: Coord {
                x: self.max_lon + padding,
                y: self.max_lat + padding,
            },
        })
    }
}

/// Rectangle the map is allowed to pan within
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampRegion {
    pub south_west: Coord<f64>,
    pub north_east: Coord<f64>,
}

impl ClampRegion {
    pub fn as_rect(&self) -> Rect<f64> {
        Rect::new(self.south_west, self.north_east)
    }

    pub fn contains(&self, point: Coord<f64>) -> bool {
        point.x >= self.south_west.x
            && point.x <= self.north_east.x
            && point.y >= self.south_west.y
            && point.y <= self.north_east.y
    }
}

/// Every vertex a feature contributes to a bounding box
///
/// Polygons contribute their outer ring only.
pub fn bounds_for_geometry(feature: &GeoFeature) -> Vec<Coord<f64>> {
    vertices(feature).collect()
}

/// Borrowing walk over the same vertices as `bounds_for_geometry`
pub fn vertices(feature: &GeoFeature) -> Box<dyn Iterator<Item = Coord<f64>> + '_> {
    match feature {
        GeoFeature::Point(p) => Box::new(std::iter::once(*p)),
        GeoFeature::LineString(line) | GeoFeature::Polygon(line) => Box::new(line.iter().copied()),
        GeoFeature::MultiLineString(lines) => Box::new(lines.iter().flatten().copied()),
    }
}

/// Bounding region over all places and feature vertices, padded on every side
///
/// # Errors
/// * `GeoError::EmptyInput` - no place and no feature vertex to bound
pub fn compute_clamp_region<'a, P, F>(places: P, features: F, padding: f64) -> GeoResult<ClampRegion>
where
    P: IntoIterator<Item = &'a Place>,
    F: IntoIterator<Item = &'a GeoFeature>,
{
    let mut bounds = BoundingBox::empty();
    bounds.expand(places.into_iter().map(|p| p.coordinates));
    for feature in features {
        bounds.expand(vertices(feature));
    }

    bounds.padded(padding)
}
