//! Oriented rectangle for placing a rotated raster over a polygon
//!
//! Coordinates are treated as a flat plane in degrees, which is adequate for
//! a single site a few hundred metres across.

use geo::Coord;
use serde::Serialize;

use crate::domain::GeoFeature;
use crate::error::{GeoError, GeoResult};

/// Rectangle aligned with a polygon's longest edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrientedRectangle {
    /// Arithmetic mean of the ring vertices
    pub center: Coord<f64>,
    /// Angle of the longest edge from the longitude axis, radians
    pub rotation: f64,
    /// top-left, top-right, bottom-right, bottom-left
    pub corners: [Coord<f64>; 4],
}

impl OrientedRectangle {
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    pub fn top_left(&self) -> Coord<f64> {
        self.corners[0]
    }

    pub fn top_right(&self) -> Coord<f64> {
        self.corners[1]
    }

    pub fn bottom_right(&self) -> Coord<f64> {
        self.corners[2]
    }

    pub fn bottom_left(&self) -> Coord<f64> {
        self.corners[3]
    }
}

/// Computes image placement for polygon features
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayAligner;

impl OverlayAligner {
    pub fn new() -> Self {
        Self
    }

    /// Align to a polygon feature
    pub fn align_feature(&self, feature: &GeoFeature) -> GeoResult<OrientedRectangle> {
        match feature {
            GeoFeature::Polygon(ring) => self.align(ring),
            other => Err(GeoError::NotAPolygon { kind: other.kind() }),
        }
    }

    /// Align to a closed ring
    ///
    /// # Algorithm
    /// 1. Center = mean of all ring vertices (not the area centroid)
    /// 2. Rotation = direction of the longest edge `(i, i+1)`; the closing
    ///    edge is not visited, and the first of several equal edges wins
    /// 3. Un-rotate every vertex about the center, take the axis-aligned box
    /// 4. Rotate the box corners back into geographic space
    ///
    /// # Errors
    /// * `GeoError::DegenerateGeometry` - fewer than two edges, no edge of
    ///   positive length, or a non-finite vertex
    pub fn align(&self, ring: &[Coord<f64>]) -> GeoResult<OrientedRectangle> {
        let degenerate = GeoError::DegenerateGeometry {
            vertices: ring.len(),
        };
        if ring.len() < 3 {
            return Err(degenerate);
        }

        let n = ring.len() as f64;
        let center = Coord {
            x: ring.iter().map(|c| c.x).sum::<f64>() / n,
            y: ring.iter().map(|c| c.y).sum::<f64>() / n,
        };
        // Any NaN or infinite vertex poisons the mean
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(degenerate);
        }

        let mut max_len = 0.0;
        let mut rotation = None;
        for edge in ring.windows(2) {
            let dx = edge[1].x - edge[0].x;
            let dy = edge[1].y - edge[0].y;
            let len = (dx * dx + dy * dy).sqrt();
            if len > max_len {
                max_len = len;
                rotation = Some(dy.atan2(dx));
            }
        }
        let rotation = rotation.ok_or(degenerate)?;

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for &vertex in ring {
            let local = rotate_about(vertex, center, -rotation);
            min_x = min_x.min(local.x);
            max_x = max_x.max(local.x);
            min_y = min_y.min(local.y);
            max_y = max_y.max(local.y);
        }

        let corners = [
            Coord { x: min_x, y: max_y },
            Coord { x: max_x, y: max_y },
            Coord { x: max_x, y: min_y },
            Coord { x: min_x, y: min_y },
        ]
        .map(|corner| rotate_about(corner, center, rotation));

        Ok(OrientedRectangle {
            center,
            rotation,
            corners,
        })
    }
}

fn rotate_about(point: Coord<f64>, center: Coord<f64>, angle: f64) -> Coord<f64> {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Coord {
        x: center.x + d.x * cos - d.y * sin,
        y: center.y + d.x * sin + d.y * cos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    fn assert_close(actual: Coord<f64>, expected: Coord<f64>) {
        assert!(
            (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn test_unit_square() {
        let ring = vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0), c(0.0, 0.0)];
        let rect = OverlayAligner::new().align(&ring).unwrap();

        assert!(rect.rotation.abs() < EPS);
        assert_close(rect.center, c(0.4, 0.4));
        assert_close(rect.top_left(), c(0.0, 1.0));
        assert_close(rect.top_right(), c(1.0, 1.0));
        assert_close(rect.bottom_right(), c(1.0, 0.0));
        assert_close(rect.bottom_left(), c(0.0, 0.0));
    }

    #[test]
    fn test_square_rotated_30_degrees() {
        let angle = 30f64.to_radians();
        let (sin, cos) = angle.sin_cos();
        let ring: Vec<Coord<f64>> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
            .iter()
            .map(|&(x, y)| c(x * cos - y * sin, x * sin + y * cos))
            .collect();

        let rect = OverlayAligner::new().align(&ring).unwrap();

        assert!((rect.rotation_degrees() - 30.0).abs() < 1e-6);
        assert_close(rect.top_left(), ring[3]);
        assert_close(rect.top_right(), ring[2]);
        assert_close(rect.bottom_right(), ring[1]);
        assert_close(rect.bottom_left(), ring[0]);
    }

    #[test]
    fn test_first_longest_edge_wins_tie() {
        // Every edge has length exactly 5
        let ring = vec![c(0.0, 0.0), c(4.0, 3.0), c(1.0, 7.0), c(-3.0, 4.0), c(0.0, 0.0)];
        let rect = OverlayAligner::new().align(&ring).unwrap();

        assert!((rect.rotation - 3f64.atan2(4.0)).abs() < EPS);
        assert_close(rect.top_left(), c(-3.0, 4.0));
        assert_close(rect.top_right(), c(1.0, 7.0));
        assert_close(rect.bottom_right(), c(4.0, 3.0));
        assert_close(rect.bottom_left(), c(0.0, 0.0));
    }

    #[test]
    fn test_triangle_aligns_to_hypotenuse() {
        let ring = vec![c(0.0, 0.0), c(4.0, 0.0), c(0.0, 3.0), c(0.0, 0.0)];
        let rect = OverlayAligner::new().align(&ring).unwrap();

        assert!((rect.rotation - 3f64.atan2(-4.0)).abs() < EPS);
        assert!((distance(rect.top_left(), rect.top_right()) - 5.0).abs() < EPS);
        assert!((distance(rect.top_right(), rect.bottom_right()) - 2.4).abs() < EPS);
    }

    #[test]
    fn test_closing_edge_not_considered() {
        // Open ring: the implicit last-to-first edge would be longest
        let ring = vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.5), c(10.0, 10.0)];
        let rect = OverlayAligner::new().align(&ring).unwrap();
        let expected = 9.5f64.atan2(9.0);
        assert!((rect.rotation - expected).abs() < EPS);
    }

    #[test]
    fn test_repeated_point_is_degenerate() {
        let ring = vec![c(1.0, 1.0); 4];
        assert_eq!(
            OverlayAligner::new().align(&ring),
            Err(GeoError::DegenerateGeometry { vertices: 4 })
        );
    }

    #[test]
    fn test_too_few_edges_is_degenerate() {
        let aligner = OverlayAligner::new();
        assert_eq!(
            aligner.align(&[]),
            Err(GeoError::DegenerateGeometry { vertices: 0 })
        );
        assert_eq!(
            aligner.align(&[c(0.0, 0.0), c(1.0, 0.0)]),
            Err(GeoError::DegenerateGeometry { vertices: 2 })
        );
    }

    #[test]
    fn test_non_finite_vertex_is_degenerate() {
        let aligner = OverlayAligner::new();
        let with_nan = vec![c(0.0, 0.0), c(f64::NAN, 0.0), c(1.0, 0.0), c(0.0, 0.0)];
        assert_eq!(
            aligner.align(&with_nan),
            Err(GeoError::DegenerateGeometry { vertices: 4 })
        );

        let with_inf = vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, f64::INFINITY), c(0.0, 0.0)];
        assert_eq!(
            aligner.align(&with_inf),
            Err(GeoError::DegenerateGeometry { vertices: 4 })
        );
    }

    #[test]
    fn test_align_feature_requires_polygon() {
        let line = GeoFeature::LineString(vec![c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0)]);
        assert_eq!(
            OverlayAligner::new().align_feature(&line),
            Err(GeoError::NotAPolygon { kind: "LineString" })
        );
    }
}
