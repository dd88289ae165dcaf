//! optics-math - Numerical building blocks for Cherenkov camera modelling
//!
//! This crate provides the small numerical kernels shared by the camera
//! geometry model and the muon ring predictor:
//!
//! - **Rotation** - 2D rotation of pixel coordinate arrays
//! - **Interpolation** - Linear interpolation that holds the end values
//! - **Sampling** - Evenly spaced sample grids and circular smoothing
//! - **Neighbors** - Radius-based neighbor search over 2D points
//!
//! # Example
//!
//! ```text
//! use optics_math::{find_neighbor_pixels, linspace};
//!
//! let xs = linspace(0.0, 1.0, 3);
//! let ys = vec![0.0; 3];
//! let neighbors = find_neighbor_pixels(&xs, &ys, 0.51)?;
//! assert_eq!(neighbors[1], vec![0, 2]);
//! ```

pub mod interp;
pub mod neighbors;
pub mod rotation;
pub mod sampling;

// Re-export commonly used types
pub use interp::{interp_clamped, InterpError};
pub use neighbors::{find_neighbor_pixels, NeighborError};
pub use rotation::{rotate_points, rotation_matrix_2d};
pub use sampling::{circular_moving_average, circular_moving_sum, linspace};
