//! Muon ring light-profile prediction
//!
//! Muons crossing a Cherenkov telescope's mirror draw rings in the camera
//! whose brightness around the circumference depends on where the muon hit
//! the mirror and on the mirror's shape. This crate predicts that brightness
//! pixel by pixel, for use as the model in ring fits.
//!
//! # Example
//!
//! ```text
//! use camera::{make_rectangular_camera_geometry, RectangularGridConfig};
//! use muon::{regular_polygon, ImpactPoint, MuonIntegratorConfig, MuonLineIntegrate, MuonRing};
//!
//! let mirror = regular_polygon(36, 12.0, (0.0, 0.0));
//! let hole = regular_polygon(6, 1.0, (0.0, 0.0));
//! let integrator = MuonLineIntegrate::new(&mirror, &hole, &MuonIntegratorConfig::default())?;
//!
//! let camera = make_rectangular_camera_geometry(&RectangularGridConfig::default())?;
//! let ring = MuonRing::new(0.0, 0.0, 0.3, 0.02);
//! let image = integrator.predict_camera(ImpactPoint::new(3.0, 0.0), &ring, &camera)?;
//! ```

pub mod config;
pub mod integrator;
pub mod polygon;
pub mod ring;

pub use config::MuonIntegratorConfig;
pub use integrator::{
    dir_to_line, pos_to_angle, pos_to_angle_array, MuonError, MuonLineIntegrate,
    MAX_ANGULAR_BINS, RAY_LENGTH,
};
pub use polygon::{polygon_from_points, regular_polygon, IntersectionLength};
pub use ring::{ImpactPoint, MuonRing};
