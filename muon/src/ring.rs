//! Muon event parameters: where the muon hit the mirror and the ring it drew.

use serde::{Deserialize, Serialize};

/// Muon impact point on the mirror, in the tilted telescope frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactPoint {
    pub x: f64,
    pub y: f64,
}

impl ImpactPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ring geometry in the camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuonRing {
    pub centre_x: f64,
    pub centre_y: f64,
    pub radius: f64,
    /// Gaussian width of the ring cross-section
    pub width: f64,
}

impl MuonRing {
    pub fn new(centre_x: f64, centre_y: f64, radius: f64, width: f64) -> Self {
        Self {
            centre_x,
            centre_y,
            radius,
            width,
        }
    }

    /// Signed distance of a camera position from the ring line; positive
    /// outside the ring.
    pub fn ring_distance(&self, x: f64, y: f64) -> f64 {
        (x - self.centre_x).hypot(y - self.centre_y) - self.radius
    }
}
