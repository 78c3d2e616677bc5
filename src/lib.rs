//! placemap - Place catalog, map clamp regions and overlay alignment for a
//! property locator map

pub mod catalog;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod geojson;
pub mod geometry;

pub use catalog::PlaceCatalog;
pub use controller::MapController;
pub use domain::{Category, Feature, GeoFeature, Place};
pub use error::{GeoError, GeoResult, LoadError};
pub use geojson::FeatureCollection;
pub use geometry::{
    BoundingBox, ClampRegion, FocusTarget, OrientedRectangle, OverlayAligner, compute_clamp_region,
};
