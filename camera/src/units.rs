//! Type-safe physical units at the camera geometry boundary
//!
//! Pixel positions and rotation angles enter the camera model as `uom`
//! quantities so callers can pass any compatible unit. Internally the model
//! stores plain meters and radians.

use uom::si::angle::{degree, radian};
use uom::si::length::{centimeter, meter, millimeter};

/// Type alias for length measurements with convenient methods
pub type Length = uom::si::f64::Length;

/// Type alias for plane angles with convenient methods
pub type Angle = uom::si::f64::Angle;

/// Extension trait for length conversions used for camera pixel layouts
pub trait LengthExt {
    /// Create length from millimeters
    fn from_millimeters(mm: f64) -> Self;

    /// Create length from centimeters
    fn from_centimeters(cm: f64) -> Self;

    /// Create length from meters
    fn from_meters(m: f64) -> Self;

    /// Get length in meters
    fn as_meters(&self) -> f64;
}

/// Extension trait for angle conversions
pub trait AngleExt {
    /// Create angle from degrees
    fn from_degrees(deg: f64) -> Self;

    /// Create angle from radians
    fn from_radians(rad: f64) -> Self;

    /// Get angle in radians
    fn as_radians(&self) -> f64;
}

impl LengthExt for Length {
    fn from_millimeters(mm: f64) -> Self {
        Length::new::<millimeter>(mm)
    }

    fn from_centimeters(cm: f64) -> Self {
        Length::new::<centimeter>(cm)
    }

    fn from_meters(m: f64) -> Self {
        Length::new::<meter>(m)
    }

    fn as_meters(&self) -> f64 {
        self.get::<meter>()
    }
}

impl AngleExt for Angle {
    fn from_degrees(deg: f64) -> Self {
        Angle::new::<degree>(deg)
    }

    fn from_radians(rad: f64) -> Self {
        Angle::new::<radian>(rad)
    }

    fn as_radians(&self) -> f64 {
        self.get::<radian>()
    }
}

/// Convert a slice of lengths to plain meter values.
pub fn to_meters(values: &[Length]) -> Vec<f64> {
    values.iter().map(|v| v.as_meters()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_conversions() {
        let pitch = Length::from_millimeters(50.0);
        assert_relative_eq!(pitch.as_meters(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(
            Length::from_centimeters(5.0).as_meters(),
            pitch.as_meters(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_angle_conversions() {
        let a = Angle::from_degrees(180.0);
        assert_relative_eq!(a.as_radians(), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(
            Angle::from_degrees(57.29577951308232).as_radians(),
            Angle::from_radians(1.0).as_radians(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_to_meters() {
        let values = [Length::from_centimeters(10.0), Length::from_meters(2.0)];
        let m = to_meters(&values);
        assert_relative_eq!(m[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(m[1], 2.0, epsilon = 1e-12);
    }
}
