//! Sampling configuration for the muon line integrator.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Angular sampling parameters of [`MuonLineIntegrate`](crate::MuonLineIntegrate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuonIntegratorConfig {
    /// Width of one camera pixel, in the same units as ring radii
    pub pixel_width: f64,
    /// Angular sub-bins evaluated per pixel width, also the smoothing window
    pub oversample_bins: usize,
}

impl Default for MuonIntegratorConfig {
    fn default() -> Self {
        Self {
            pixel_width: 0.2,
            oversample_bins: 5,
        }
    }
}

impl MuonIntegratorConfig {
    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load from JSON file. Missing fields take their default values.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
