use geo::{Coord, Rect};
use serde::Serialize;

use super::bounds::{BoundingBox, vertices};
use crate::domain::GeoFeature;
use crate::error::{GeoError, GeoResult};

/// Where the camera goes when a feature is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FocusTarget {
    /// Fly to a single point
    Center { center: Coord<f64> },
    /// Fit the viewport to a box
    Fit { bounds: Rect<f64> },
}

/// Points are centred on, every other geometry is fitted
pub fn focus_target(feature: &GeoFeature) -> GeoResult<FocusTarget> {
    if let GeoFeature::Point(center) = feature {
        return Ok(FocusTarget::Center { center: *center });
    }

    BoundingBox::from_points(vertices(feature))
        .and_then(|b| b.to_rect())
        .map(|bounds| FocusTarget::Fit { bounds })
        .ok_or(GeoError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn test_point_is_centered() {
        let target = focus_target(&GeoFeature::Point(c(120.87, 14.37))).unwrap();
        assert_eq!(target, FocusTarget::Center { center: c(120.87, 14.37) });
    }

    #[test]
    fn test_polygon_is_fitted() {
        let ring = vec![c(0.0, 0.0), c(2.0, 0.0), c(2.0, 1.0), c(0.0, 0.0)];
        let target = focus_target(&GeoFeature::Polygon(ring)).unwrap();
        assert_eq!(
            target,
            FocusTarget::Fit {
                bounds: Rect::new(c(0.0, 0.0), c(2.0, 1.0))
            }
        );
    }

    #[test]
    fn test_linestring_is_fitted() {
        let line = vec![c(120.87, 14.36), c(120.86, 14.38), c(120.88, 14.37)];
        let target = focus_target(&GeoFeature::LineString(line)).unwrap();
        assert_eq!(
            target,
            FocusTarget::Fit {
                bounds: Rect::new(c(120.86, 14.36), c(120.88, 14.38))
            }
        );
    }

    #[test]
    fn test_multilinestring_is_fitted() {
        let lines = vec![
            vec![c(0.0, 0.0), c(1.0, 2.0)],
            vec![c(-3.0, 1.0), c(-2.0, 5.0)],
            vec![c(4.0, -1.0)],
        ];
        let target = focus_target(&GeoFeature::MultiLineString(lines.clone())).unwrap();

        let FocusTarget::Fit { bounds } = target else {
            panic!("expected fit, got {:?}", target);
        };
        assert_eq!(bounds.min(), c(-3.0, -1.0));
        assert_eq!(bounds.max(), c(4.0, 5.0));
        for point in lines.iter().flatten() {
            assert!(point.x >= bounds.min().x && point.x <= bounds.max().x);
            assert!(point.y >= bounds.min().y && point.y <= bounds.max().y);
        }
    }

    #[test]
    fn test_empty_line_has_no_target() {
        assert_eq!(
            focus_target(&GeoFeature::LineString(Vec::new())),
            Err(GeoError::EmptyInput)
        );
    }
}
