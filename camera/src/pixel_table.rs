//! Column-oriented camera description as read from a geometry table.
//!
//! File formats are handled elsewhere. Whatever loads the table hands over
//! these columns, and [`CameraGeometry::from_pixel_table`] turns them into a
//! geometry.
//!
//! [`CameraGeometry::from_pixel_table`]: crate::CameraGeometry::from_pixel_table

use serde::{Deserialize, Serialize};

/// Per-pixel columns for one camera. Positions and diameters are in meters,
/// areas in square meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelTable {
    pub cam_id: i64,
    pub pix_id: Vec<usize>,
    pub pix_posx: Vec<f64>,
    pub pix_posy: Vec<f64>,
    pub pix_diam: Vec<f64>,
    pub pix_area: Vec<f64>,
    /// Neighbor indices per pixel, rows padded with negative values
    #[serde(default)]
    pub pix_neig: Option<Vec<Vec<i64>>>,
}

impl PixelTable {
    /// Number of rows in the `pix_id` column
    pub fn len(&self) -> usize {
        self.pix_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pix_id.is_empty()
    }

    /// Mean pixel diameter, `None` for an empty table
    pub fn mean_diameter(&self) -> Option<f64> {
        if self.pix_diam.is_empty() {
            return None;
        }
        Some(self.pix_diam.iter().sum::<f64>() / self.pix_diam.len() as f64)
    }
}

/// Drop the negative padding from a stored neighbor row.
pub(crate) fn unmask_neighbor_row(row: &[i64]) -> Vec<usize> {
    row.iter()
        .filter(|&&n| n >= 0)
        .map(|&n| n as usize)
        .collect()
}
