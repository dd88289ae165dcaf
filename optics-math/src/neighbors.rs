//! Radius-based neighbor search over 2D points.
//!
//! Builds an R-tree over every point once, then runs one radius query per
//! point. Used to derive pixel adjacency when a camera description does not
//! carry its own neighbor table.

use rstar::primitives::GeomWithData;
use rstar::RTree;
use thiserror::Error;

/// Errors that can occur during neighbor search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeighborError {
    #[error("Coordinate arrays must have the same length (x: {0}, y: {1})")]
    MismatchedLengths(usize, usize),
    #[error("Search radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
}

type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// For every point, the indices of all *other* points within `rad`.
///
/// Distances are Euclidean and the radius is inclusive. Each neighbor list is
/// sorted ascending; a point with no neighbors gets an empty list. Choose
/// `rad` slightly larger than the pixel pitch so floating-point jitter does not
/// drop true neighbors.
///
/// # Errors
/// * `NeighborError::MismatchedLengths` - `pix_x` and `pix_y` differ in length
/// * `NeighborError::InvalidRadius` - `rad` is negative, NaN or infinite
pub fn find_neighbor_pixels(
    pix_x: &[f64],
    pix_y: &[f64],
    rad: f64,
) -> Result<Vec<Vec<usize>>, NeighborError> {
    if pix_x.len() != pix_y.len() {
        return Err(NeighborError::MismatchedLengths(pix_x.len(), pix_y.len()));
    }
    if !rad.is_finite() || rad < 0.0 {
        return Err(NeighborError::InvalidRadius(rad));
    }

    let points: Vec<IndexedPoint> = pix_x
        .iter()
        .zip(pix_y)
        .enumerate()
        .map(|(i, (&x, &y))| IndexedPoint::new([x, y], i))
        .collect();
    let tree = RTree::bulk_load(points);

    let max_squared_radius = rad * rad;
    log::debug!(
        "neighbor search over {} points with radius {rad}",
        pix_x.len()
    );

    let neighbors = pix_x
        .iter()
        .zip(pix_y)
        .enumerate()
        .map(|(i, (&x, &y))| {
            let mut found: Vec<usize> = tree
                .locate_within_distance([x, y], max_squared_radius)
                .map(|p| p.data)
                .filter(|&j| j != i)
                .collect();
            found.sort_unstable();
            found
        })
        .collect();

    Ok(neighbors)
}
