//! Mirror and hole outlines, and the chord length of a ray through them.
//!
//! The predictor only needs one geometric query: how much of a straight
//! segment lies inside a polygon. [`IntersectionLength`] names that query so
//! the predictor does not care which geometry kernel answers it; the
//! implementation here clips with `geo`.

use geo::line_intersection::{line_intersection, LineIntersection};
use geo::{Area, BooleanOps, Coord, EuclideanLength, Line, LineString, MultiLineString, Polygon};

/// Length of the part of a segment that lies inside a planar region.
pub trait IntersectionLength {
    /// Total length of `start -> end` inside `self`, boundary included. Zero
    /// when the segment misses the region or only touches it at a point.
    fn intersection_length(&self, start: Coord<f64>, end: Coord<f64>) -> f64;
}

impl IntersectionLength for Polygon<f64> {
    fn intersection_length(&self, start: Coord<f64>, end: Coord<f64>) -> f64 {
        if is_degenerate(self) {
            return 0.0;
        }

        let segment = MultiLineString::new(vec![LineString::new(vec![start, end])]);
        // clip keeps the interior only
        let inside = self.clip(&segment, false).euclidean_length();
        let length = inside + boundary_overlap(self, Line::new(start, end));

        if length.is_finite() {
            length
        } else {
            0.0
        }
    }
}

/// Length of `segment` running along the polygon's edges.
fn boundary_overlap(polygon: &Polygon<f64>, segment: Line<f64>) -> f64 {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| ring.lines())
        .filter_map(|edge| match line_intersection(segment, edge) {
            Some(LineIntersection::Collinear { intersection }) => {
                Some(intersection.euclidean_length())
            }
            _ => None,
        })
        .sum()
}

/// A polygon with fewer than three distinct vertices or no area cannot
/// intersect anything along a length.
fn is_degenerate(polygon: &Polygon<f64>) -> bool {
    // closed rings repeat the first vertex
    polygon.exterior().0.len() < 4 || polygon.unsigned_area() <= 0.0
}

/// Build a polygon from an ordered outline. The ring is closed automatically.
///
/// An empty or collinear outline gives a degenerate polygon, which every
/// segment misses.
pub fn polygon_from_points(points: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(LineString::from(points.to_vec()), vec![])
}

/// Outline of a regular `n_sides` polygon with circumradius `radius`.
///
/// The first vertex sits on the +y axis of `centre`. Returns an empty outline
/// for fewer than three sides or a non-positive radius, which builds a
/// degenerate polygon (used for "no hole").
pub fn regular_polygon(n_sides: usize, radius: f64, centre: (f64, f64)) -> Vec<(f64, f64)> {
    if n_sides < 3 || radius <= 0.0 {
        return Vec::new();
    }

    let step = 2.0 * std::f64::consts::PI / n_sides as f64;
    (0..n_sides)
        .map(|i| {
            let (sin_a, cos_a) = (step * i as f64).sin_cos();
            (centre.0 + radius * sin_a, centre.1 + radius * cos_a)
        })
        .collect()
}
