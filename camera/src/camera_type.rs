//! Camera family and pixel shape lookup by pixel count.
//!
//! Raw pixel positions do not say which camera they came from. The pixel
//! count is distinctive enough for the known CTA cameras, so a small table maps
//! it to a camera family and pixel shape. The table is a value, passed to
//! whatever needs it, and can be loaded from JSON to add cameras.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Shape of the individual photodetector pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelShape {
    Hexagonal,
    Rectangular,
    Unknown,
}

impl fmt::Display for PixelShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PixelShape::Hexagonal => "hexagonal",
            PixelShape::Rectangular => "rectangular",
            PixelShape::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Telescope size class the camera belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CameraFamily {
    /// Small-sized telescope
    Sst,
    /// Medium-sized telescope
    Mst,
    /// Large-sized telescope
    Lst,
    Unknown,
}

impl fmt::Display for CameraFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CameraFamily::Sst => "SST",
            CameraFamily::Mst => "MST",
            CameraFamily::Lst => "LST",
            CameraFamily::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Camera family and pixel shape pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraType {
    pub family: CameraFamily,
    pub pix_type: PixelShape,
}

impl CameraType {
    pub fn new(family: CameraFamily, pix_type: PixelShape) -> Self {
        Self { family, pix_type }
    }
}

/// Immutable mapping from pixel count to [`CameraType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraTypeTable {
    entries: BTreeMap<usize, CameraType>,
    /// Returned for pixel counts missing from `entries`
    fallback: CameraType,
}

impl CameraTypeTable {
    /// Create a table from explicit entries and a fallback type
    pub fn new(entries: BTreeMap<usize, CameraType>, fallback: CameraType) -> Self {
        Self { entries, fallback }
    }

    /// Return a copy of this table with one entry added or replaced
    pub fn with_entry(mut self, npix: usize, camera_type: CameraType) -> Self {
        self.entries.insert(npix, camera_type);
        self
    }

    /// Camera type for a camera with `npix` pixels.
    pub fn guess_camera_type(&self, npix: usize) -> CameraType {
        match self.entries.get(&npix) {
            Some(camera_type) => *camera_type,
            None => {
                log::warn!(
                    "no camera type registered for {npix} pixels, assuming {} {}",
                    self.fallback.family,
                    self.fallback.pix_type
                );
                self.fallback
            }
        }
    }

    /// Number of registered pixel counts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load from JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl Default for CameraTypeTable {
    /// The known CTA cameras; anything else is treated as an unknown
    /// hexagonal camera.
    fn default() -> Self {
        let entries = BTreeMap::from([
            (2048, CameraType::new(CameraFamily::Sst, PixelShape::Rectangular)),
            (1141, CameraType::new(CameraFamily::Mst, PixelShape::Hexagonal)),
            (1855, CameraType::new(CameraFamily::Lst, PixelShape::Hexagonal)),
            (11328, CameraType::new(CameraFamily::Sst, PixelShape::Rectangular)),
        ]);
        Self::new(
            entries,
            CameraType::new(CameraFamily::Unknown, PixelShape::Hexagonal),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2048, CameraFamily::Sst, PixelShape::Rectangular)]
    #[case(1141, CameraFamily::Mst, PixelShape::Hexagonal)]
    #[case(1855, CameraFamily::Lst, PixelShape::Hexagonal)]
    #[case(11328, CameraFamily::Sst, PixelShape::Rectangular)]
    #[case(7, CameraFamily::Unknown, PixelShape::Hexagonal)]
    fn test_default_table(
        #[case] npix: usize,
        #[case] family: CameraFamily,
        #[case] shape: PixelShape,
    ) {
        let table = CameraTypeTable::default();
        assert_eq!(table.guess_camera_type(npix), CameraType::new(family, shape));
    }

    #[test]
    fn test_with_entry_overrides() {
        let table = CameraTypeTable::default().with_entry(
            1141,
            CameraType::new(CameraFamily::Mst, PixelShape::Unknown),
        );
        assert_eq!(table.guess_camera_type(1141).pix_type, PixelShape::Unknown);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera_types.json");

        let table = CameraTypeTable::default().with_entry(
            64,
            CameraType::new(CameraFamily::Unknown, PixelShape::Rectangular),
        );
        table.save_to_file(&path).unwrap();

        let loaded = CameraTypeTable::load_from_file(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CameraTypeTable::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PixelShape::Hexagonal.to_string(), "hexagonal");
        assert_eq!(CameraFamily::Lst.to_string(), "LST");
    }
}
