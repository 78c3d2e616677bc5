//! Map-side UI state
//!
//! Sidebar and map event handlers receive a `&mut MapController` instead of
//! reaching for shared map and marker handles.

use geo::Coord;

use crate::catalog::{self, CategoryGroup, PROPERTY_COORDINATES, PROPERTY_NAME, PlaceCatalog};
use crate::domain::{Category, Place};
use crate::error::{GeoError, GeoResult};
use crate::geojson::FeatureCollection;
use crate::geometry::{
    ClampRegion, FocusTarget, OrientedRectangle, OverlayAligner, compute_clamp_region,
    focus_target,
};

#[derive(Debug, Clone)]
pub struct MapController {
    catalog: PlaceCatalog,
    features: FeatureCollection,
    selected_category: Option<Category>,
    selected_place: Option<String>,
}

impl MapController {
    pub fn new(catalog: PlaceCatalog, features: FeatureCollection) -> Self {
        Self {
            catalog,
            features,
            selected_category: None,
            selected_place: None,
        }
    }

    pub fn catalog(&self) -> &PlaceCatalog {
        &self.catalog
    }

    pub fn features(&self) -> &FeatureCollection {
        &self.features
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn selected_place(&self) -> Option<&str> {
        self.selected_place.as_deref()
    }

    /// Change the category filter and return the places left on the map
    ///
    /// A selected place outside the new category is deselected.
    pub fn select_category(&mut self, category: Option<Category>) -> Vec<&Place> {
        self.selected_category = category;

        let stale = match (category, self.selected_place.as_deref()) {
            (Some(category), Some(name)) => self
                .catalog
                .get(name)
                .is_some_and(|place| place.category != category),
            _ => false,
        };
        if stale {
            self.selected_place = None;
        }

        self.visible_places()
    }

    pub fn visible_places(&self) -> Vec<&Place> {
        self.catalog.filter_by_category(self.selected_category)
    }

    pub fn grouped_places(&self) -> Vec<CategoryGroup<'_>> {
        catalog::group_by_category(self.visible_places())
    }

    /// Select a place, the property, or a named map feature
    ///
    /// Unknown names leave the current selection untouched.
    pub fn select_place(&mut self, name: &str) -> Option<FocusTarget> {
        let target = self.focus_for(name).ok()?;
        self.selected_place = Some(name.to_string());
        Some(target)
    }

    /// Camera target for a name without changing the selection
    pub fn focus_for(&self, name: &str) -> GeoResult<FocusTarget> {
        if let Some(place) = self.catalog.get(name) {
            return Ok(center(place.coordinates));
        }
        // The property marker wins over a site polygon of the same name
        if name == PROPERTY_NAME {
            return Ok(center(PROPERTY_COORDINATES));
        }

        let feature = self
            .features
            .find(name)
            .ok_or_else(|| GeoError::NotFound(name.to_string()))?;
        focus_target(&feature.geometry)
    }

    /// Panning limits over every catalog place and every feature
    pub fn clamp_region(&self, padding: f64) -> GeoResult<ClampRegion> {
        compute_clamp_region(self.catalog.iter(), self.features.geometries(), padding)
    }

    /// Image placement over the named polygon
    pub fn overlay_for(&self, name: &str) -> GeoResult<OrientedRectangle> {
        let feature = self
            .features
            .find(name)
            .ok_or_else(|| GeoError::NotFound(name.to_string()))?;
        OverlayAligner::new().align_feature(&feature.geometry)
    }
}

fn center(center: Coord<f64>) -> FocusTarget {
    FocusTarget::Center { center }
}
