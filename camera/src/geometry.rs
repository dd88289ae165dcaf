//! Camera geometry: pixel ids, positions, areas, shapes and adjacency.
//!
//! A [`CameraGeometry`] is built once per telescope definition and reused for
//! every event. Per-pixel columns are index-aligned and always the same
//! length; the constructors check this.

use crate::camera_type::{CameraTypeTable, PixelShape};
use crate::pixel_table::{unmask_neighbor_row, PixelTable};
use crate::units::{to_meters, Angle, AngleExt, Length};
use ndarray::Array1;
use optics_math::{find_neighbor_pixels, linspace, rotate_points, NeighborError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Added to the pixel pitch (meters) when searching for neighbors so that
/// floating-point jitter never drops an adjacent pixel.
pub const NEIGHBOR_RADIUS_MARGIN: f64 = 0.01;

/// Errors that can occur while building a camera geometry
#[derive(Error, Debug)]
pub enum CameraGeometryError {
    #[error("unsupported pixel type: {0}")]
    UnsupportedGeometryKind(PixelShape),

    #[error("need at least {required} pixels, got {found}")]
    TooFewPixels { required: usize, found: usize },

    #[error("column `{column}` has {found} entries, expected {expected}")]
    MismatchedColumns {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("pixel {pixel} lists neighbor {neighbor}, but the camera has only {npix} pixels")]
    NeighborOutOfRange {
        pixel: usize,
        neighbor: usize,
        npix: usize,
    },

    #[error("neighbor search failed: {0}")]
    Neighbors(#[from] NeighborError),
}

/// Camera identifier: numeric in geometry tables, a family name when guessed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CameraId {
    Number(i64),
    Name(String),
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CameraId::Number(n) => write!(f, "{n}"),
            CameraId::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<i64> for CameraId {
    fn from(n: i64) -> Self {
        CameraId::Number(n)
    }
}

impl From<&str> for CameraId {
    fn from(name: &str) -> Self {
        CameraId::Name(name.to_string())
    }
}

/// Pixel layout of a Cherenkov camera.
///
/// Coordinates are stored in meters and areas in square meters. `neighbors[i]`
/// holds the *indices* (not ids) of the pixels adjacent to pixel `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraGeometry {
    cam_id: CameraId,
    pix_id: Vec<usize>,
    pix_x: Array1<f64>,
    pix_y: Array1<f64>,
    pix_area: Array1<f64>,
    neighbors: Vec<Vec<usize>>,
    pix_type: PixelShape,
}

impl CameraGeometry {
    /// Assemble a geometry from its columns.
    ///
    /// # Errors
    /// * `CameraGeometryError::MismatchedColumns` - a per-pixel column differs
    ///   in length from `pix_id`
    /// * `CameraGeometryError::NeighborOutOfRange` - a neighbor index does not
    ///   name a pixel
    pub fn new(
        cam_id: CameraId,
        pix_id: Vec<usize>,
        pix_x: Array1<f64>,
        pix_y: Array1<f64>,
        pix_area: Array1<f64>,
        neighbors: Vec<Vec<usize>>,
        pix_type: PixelShape,
    ) -> Result<Self, CameraGeometryError> {
        let npix = pix_id.len();
        for (column, found) in [
            ("pix_x", pix_x.len()),
            ("pix_y", pix_y.len()),
            ("pix_area", pix_area.len()),
            ("neighbors", neighbors.len()),
        ] {
            if found != npix {
                return Err(CameraGeometryError::MismatchedColumns {
                    column,
                    expected: npix,
                    found,
                });
            }
        }

        for (pixel, list) in neighbors.iter().enumerate() {
            if let Some(&neighbor) = list.iter().find(|&&n| n >= npix) {
                return Err(CameraGeometryError::NeighborOutOfRange {
                    pixel,
                    neighbor,
                    npix,
                });
            }
        }

        Ok(Self {
            cam_id,
            pix_id,
            pix_x,
            pix_y,
            pix_area,
            neighbors,
            pix_type,
        })
    }

    /// Build a geometry from a tabular camera description.
    ///
    /// With `recalc_neighbors`, or when the table carries no neighbor column,
    /// adjacency is recomputed from positions using the mean pixel diameter
    /// plus [`NEIGHBOR_RADIUS_MARGIN`]. Otherwise the stored rows are used with
    /// their negative padding removed. Tabulated cameras are hexagonal.
    pub fn from_pixel_table(
        table: &PixelTable,
        recalc_neighbors: bool,
    ) -> Result<Self, CameraGeometryError> {
        let npix = table.len();
        if npix == 0 {
            return Err(CameraGeometryError::TooFewPixels {
                required: 1,
                found: 0,
            });
        }
        if table.pix_diam.len() != npix {
            return Err(CameraGeometryError::MismatchedColumns {
                column: "pix_diam",
                expected: npix,
                found: table.pix_diam.len(),
            });
        }

        let neighbors: Vec<Vec<usize>> = match (&table.pix_neig, recalc_neighbors) {
            (Some(rows), false) => rows.iter().map(|row| unmask_neighbor_row(row)).collect(),
            _ => {
                let mean_diam = table.mean_diameter().unwrap_or_default();
                let rad = mean_diam + NEIGHBOR_RADIUS_MARGIN;
                log::debug!(
                    "recomputing neighbors for camera {} with radius {rad} m",
                    table.cam_id
                );
                find_neighbor_pixels(&table.pix_posx, &table.pix_posy, rad)?
            }
        };

        Self::new(
            CameraId::Number(table.cam_id),
            table.pix_id.clone(),
            Array1::from(table.pix_posx.clone()),
            Array1::from(table.pix_posy.clone()),
            Array1::from(table.pix_area.clone()),
            neighbors,
            PixelShape::Hexagonal,
        )
    }

    pub fn cam_id(&self) -> &CameraId {
        &self.cam_id
    }

    pub fn pix_id(&self) -> &[usize] {
        &self.pix_id
    }

    /// Pixel x coordinates in meters
    pub fn pix_x(&self) -> &Array1<f64> {
        &self.pix_x
    }

    /// Pixel y coordinates in meters
    pub fn pix_y(&self) -> &Array1<f64> {
        &self.pix_y
    }

    /// Pixel areas in square meters
    pub fn pix_area(&self) -> &Array1<f64> {
        &self.pix_area
    }

    pub fn neighbors(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    pub fn pix_type(&self) -> PixelShape {
        self.pix_type
    }

    pub fn n_pixels(&self) -> usize {
        self.pix_id.len()
    }

    /// Pixel ids of the neighbors of the pixel at `index`
    pub fn neighbor_ids(&self, index: usize) -> Option<Vec<usize>> {
        self.neighbors
            .get(index)
            .map(|list| list.iter().map(|&n| self.pix_id[n]).collect())
    }

    /// Rotate the pixel coordinates about the camera origin, in place.
    ///
    /// A positive angle turns the layout clockwise. Only `pix_x` and `pix_y`
    /// change; ids, areas, shape and neighbor lists are kept as they are, since
    /// a rigid rotation does not change adjacency.
    pub fn rotate(&mut self, angle: Angle) {
        let (x, y) = rotate_points(self.pix_x.view(), self.pix_y.view(), angle.as_radians());
        self.pix_x = x;
        self.pix_y = y;
    }

    /// Copy of this geometry with rotated coordinates, see [`Self::rotate`]
    pub fn rotated(&self, angle: Angle) -> Self {
        let mut geom = self.clone();
        geom.rotate(angle);
        geom
    }
}

/// Build a geometry from raw pixel positions alone.
///
/// The camera family and pixel shape come from `table`, keyed by pixel count.
/// The first two pixels are assumed adjacent: their separation is the pitch,
/// which fixes the pixel area and the neighbor search radius.
///
/// # Errors
/// * `CameraGeometryError::TooFewPixels` - fewer than two positions
/// * `CameraGeometryError::MismatchedColumns` - `pix_x` and `pix_y` differ in length
/// * `CameraGeometryError::UnsupportedGeometryKind` - the table maps this pixel
///   count to a shape that is neither hexagonal nor rectangular
pub fn guess_camera_geometry(
    pix_x: &[Length],
    pix_y: &[Length],
    table: &CameraTypeTable,
) -> Result<CameraGeometry, CameraGeometryError> {
    let npix = pix_x.len();
    if pix_y.len() != npix {
        return Err(CameraGeometryError::MismatchedColumns {
            column: "pix_y",
            expected: npix,
            found: pix_y.len(),
        });
    }
    if npix < 2 {
        return Err(CameraGeometryError::TooFewPixels {
            required: 2,
            found: npix,
        });
    }

    let camera_type = table.guess_camera_type(npix);
    let xs = to_meters(pix_x);
    let ys = to_meters(pix_y);

    let pitch = (xs[1] - xs[0]).hypot(ys[1] - ys[0]);

    let area = match camera_type.pix_type {
        PixelShape::Hexagonal => {
            // radius to the hexagon vertex
            let rad = pitch / 3.0_f64.sqrt();
            rad * rad * (3.0 * 3.0_f64.sqrt() / 2.0)
        }
        PixelShape::Rectangular => pitch * pitch,
        other => return Err(CameraGeometryError::UnsupportedGeometryKind(other)),
    };

    let neighbors = find_neighbor_pixels(&xs, &ys, pitch + NEIGHBOR_RADIUS_MARGIN)?;

    CameraGeometry::new(
        CameraId::Name(camera_type.family.to_string()),
        (0..npix).collect(),
        Array1::from(xs),
        Array1::from(ys),
        Array1::from_elem(npix, area),
        neighbors,
        camera_type.pix_type,
    )
}

/// Layout of a synthetic rectangular camera. Ranges are pixel-center extents
/// in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularGridConfig {
    pub npix_x: usize,
    pub npix_y: usize,
    pub range_x: (f64, f64),
    pub range_y: (f64, f64),
}

impl Default for RectangularGridConfig {
    fn default() -> Self {
        Self {
            npix_x: 40,
            npix_y: 40,
            range_x: (-0.5, 0.5),
            range_y: (-0.5, 0.5),
        }
    }
}

/// Generate a simple camera with square pixels on a regular grid.
///
/// Pixel `j * npix_x + i` sits at column `i`, row `j`. Used mostly for testing
/// and for quick predictions without a real camera description.
pub fn make_rectangular_camera_geometry(
    config: &RectangularGridConfig,
) -> Result<CameraGeometry, CameraGeometryError> {
    if config.npix_x < 2 || config.npix_y < 1 {
        return Err(CameraGeometryError::TooFewPixels {
            required: 2,
            found: config.npix_x * config.npix_y,
        });
    }

    let bx = linspace(config.range_x.0, config.range_x.1, config.npix_x);
    let by = linspace(config.range_y.0, config.range_y.1, config.npix_y);

    let npix = config.npix_x * config.npix_y;
    let mut xs = Vec::with_capacity(npix);
    let mut ys = Vec::with_capacity(npix);
    for &y in &by {
        for &x in &bx {
            xs.push(x);
            ys.push(y);
        }
    }

    let half_pitch = (bx[1] - bx[0]).abs() / 2.0;
    let neighbors = find_neighbor_pixels(&xs, &ys, half_pitch * 2.001)?;

    CameraGeometry::new(
        CameraId::Number(-1),
        (0..npix).collect(),
        Array1::from(xs),
        Array1::from(ys),
        Array1::from_elem(npix, (2.0 * half_pitch).powi(2)),
        neighbors,
        PixelShape::Rectangular,
    )
}
