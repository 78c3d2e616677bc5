use geo::Coord;

/// Geometry of a loaded map feature, coordinates as (lon, lat)
#[derive(Debug, Clone, PartialEq)]
pub enum GeoFeature {
    Point(Coord<f64>),
    LineString(Vec<Coord<f64>>),
    MultiLineString(Vec<Vec<Coord<f64>>>),
    /// Outer ring only; the first and last vertex coincide for a closed ring
    Polygon(Vec<Coord<f64>>),
}

impl GeoFeature {
    /// GeoJSON geometry type name
    pub fn kind(&self) -> &'static str {
        match self {
            GeoFeature::Point(_) => "Point",
            GeoFeature::LineString(_) => "LineString",
            GeoFeature::MultiLineString(_) => "MultiLineString",
            GeoFeature::Polygon(_) => "Polygon",
        }
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, GeoFeature::Polygon(_))
    }
}

/// A geometry together with its display name
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: Option<String>,
    pub geometry: GeoFeature,
}

impl Feature {
    pub fn new(name: Option<String>, geometry: GeoFeature) -> Self {
        Self { name, geometry }
    }

    pub fn named(name: impl Into<String>, geometry: GeoFeature) -> Self {
        Self::new(Some(name.into()), geometry)
    }

    /// Name shown in popups, "Unnamed" when absent
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}
