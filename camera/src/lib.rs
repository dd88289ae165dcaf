//! Cherenkov camera geometry
//!
//! Describes the photodetector array of an imaging atmospheric Cherenkov
//! telescope camera: where each pixel sits, its area and shape, and which
//! pixels are adjacent to it.
//!
//! - [`CameraGeometry`] - the per-pixel data model, with in-place rotation
//! - [`guess_camera_geometry`] - build a geometry from raw positions alone
//! - [`make_rectangular_camera_geometry`] - synthetic square-pixel cameras
//! - [`CameraTypeTable`] - pixel count to camera family / pixel shape lookup

pub mod camera_type;
pub mod geometry;
pub mod pixel_table;
pub mod units;

pub use camera_type::{CameraFamily, CameraType, CameraTypeTable, PixelShape};
pub use geometry::{
    guess_camera_geometry, make_rectangular_camera_geometry, CameraGeometry,
    CameraGeometryError, CameraId, RectangularGridConfig, NEIGHBOR_RADIUS_MARGIN,
};
pub use pixel_table::PixelTable;
