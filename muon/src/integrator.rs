//! Expected 2D image of a muon ring for a given mirror geometry.
//!
//! A muon hitting the mirror at an impact point emits Cherenkov light in a
//! cone. The light collected at each azimuth around the ring is proportional
//! to the chord of mirror (minus central hole) seen along that azimuth from
//! the impact point. [`MuonLineIntegrate`] integrates those chords into an
//! angular profile, then maps the profile onto camera pixels with a Gaussian
//! radial cross-section.
//!
//! # Angle convention
//!
//! Angles are measured from the +y axis towards +x, i.e. a direction `a` is
//! `(sin a, cos a)`. The same convention is used for profile generation
//! ([`dir_to_line`]) and for pixel lookup ([`pos_to_angle`]), which is why
//! the latter calls `atan2(dx, dy)`. The pixel angle is shifted by π before
//! lookup: the profile is built outward from the impact point, while each
//! pixel sees the ring from the opposite side of its centre.

use crate::config::MuonIntegratorConfig;
use crate::polygon::{polygon_from_points, IntersectionLength};
use crate::ring::{ImpactPoint, MuonRing};
use camera::CameraGeometry;
use geo::{Coord, Polygon};
use ndarray::{Array1, ArrayView1, Zip};
use optics_math::{circular_moving_average, interp_clamped, linspace, InterpError};
use rayon::prelude::*;
use std::f64::consts::PI;
use thiserror::Error;

/// Length of the ray cast from the impact point. Must exceed any mirror
/// dimension.
pub const RAY_LENGTH: f64 = 100.0;

/// Upper limit on the angular samples of one profile. A ring needing more is
/// rejected rather than allocated.
pub const MAX_ANGULAR_BINS: usize = 1 << 22;

/// Errors that can occur while predicting muon images
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MuonError {
    #[error("pixel width must be positive and finite, got {0}")]
    InvalidPixelWidth(f64),

    #[error("oversample_bins must be at least 1")]
    InvalidOversampling,

    #[error("ring radius must be finite, got {0}")]
    InvalidRadius(f64),

    #[error("ring radius {radius} gives {bins} angular bins, need at least 2")]
    TooFewAngularBins { radius: f64, bins: usize },

    #[error("ring radius {radius} needs {bins} angular bins, limit is {limit}")]
    TooManyAngularBins {
        radius: f64,
        bins: usize,
        limit: usize,
    },

    #[error("ring width must be non-zero and finite, got {0}")]
    InvalidRingWidth(f64),

    #[error("pixel coordinate arrays differ in length (x: {0}, y: {1})")]
    MismatchedPixelArrays(usize, usize),

    #[error("profile interpolation failed: {0}")]
    Interpolation(#[from] InterpError),
}

/// End point of a segment of `length` starting at `(start_x, start_y)` in
/// direction `angle` (radians from +y towards +x).
pub fn dir_to_line(start_x: f64, start_y: f64, angle: f64, length: f64) -> (f64, f64) {
    let (sin_a, cos_a) = angle.sin_cos();
    (start_x + length * sin_a, start_y + length * cos_a)
}

/// Angle of a pixel around the ring centre, same convention as [`dir_to_line`].
///
/// Returns values in `[-π, π]`.
pub fn pos_to_angle(centre_x: f64, centre_y: f64, pixel_x: f64, pixel_y: f64) -> f64 {
    (pixel_x - centre_x).atan2(pixel_y - centre_y)
}

/// Elementwise [`pos_to_angle`] over paired pixel coordinate arrays.
pub fn pos_to_angle_array(
    centre_x: f64,
    centre_y: f64,
    pixel_x: ArrayView1<f64>,
    pixel_y: ArrayView1<f64>,
) -> Array1<f64> {
    Zip::from(&pixel_x)
        .and(&pixel_y)
        .map_collect(|&x, &y| pos_to_angle(centre_x, centre_y, x, y))
}

/// Muon image predictor for one mirror design.
///
/// Immutable once built; share it across events and threads.
#[derive(Debug, Clone)]
pub struct MuonLineIntegrate {
    mirror: Polygon<f64>,
    hole: Polygon<f64>,
    pixel_width: f64,
    oversample_bins: usize,
}

impl MuonLineIntegrate {
    /// Store the mirror and hole outlines.
    ///
    /// # Arguments
    /// * `mirror_points` - Ordered outline of the reflective surface
    /// * `hole_points` - Ordered outline of the central obstruction; pass an
    ///   empty slice when there is none
    /// * `config` - Angular sampling parameters
    ///
    /// # Errors
    /// * `MuonError::InvalidPixelWidth` - pixel width is not positive and finite
    /// * `MuonError::InvalidOversampling` - zero oversampling bins
    pub fn new(
        mirror_points: &[(f64, f64)],
        hole_points: &[(f64, f64)],
        config: &MuonIntegratorConfig,
    ) -> Result<Self, MuonError> {
        if !(config.pixel_width.is_finite() && config.pixel_width > 0.0) {
            return Err(MuonError::InvalidPixelWidth(config.pixel_width));
        }
        if config.oversample_bins == 0 {
            return Err(MuonError::InvalidOversampling);
        }

        Ok(Self {
            mirror: polygon_from_points(mirror_points),
            hole: polygon_from_points(hole_points),
            pixel_width: config.pixel_width,
            oversample_bins: config.oversample_bins,
        })
    }

    pub fn mirror(&self) -> &Polygon<f64> {
        &self.mirror
    }

    pub fn hole(&self) -> &Polygon<f64> {
        &self.hole
    }

    pub fn pixel_width(&self) -> f64 {
        self.pixel_width
    }

    pub fn oversample_bins(&self) -> usize {
        self.oversample_bins
    }

    /// Number of angular samples used for a ring of `radius`.
    ///
    /// Saturates at `usize::MAX` for huge radii.
    pub fn angular_bins(&self, radius: f64) -> usize {
        let per_circumference = (2.0 * PI * radius / self.pixel_width).floor();
        if per_circumference.is_nan() || per_circumference <= 0.0 {
            return 0;
        }
        (per_circumference as usize).saturating_mul(self.oversample_bins)
    }

    /// Illuminated path length along direction `angle` from the impact point.
    ///
    /// The mirror chord minus the hole chord. Directions that miss the mirror
    /// or the hole contribute zero for that term.
    pub fn intersect_polygon(&self, impact_x: f64, impact_y: f64, angle: f64) -> f64 {
        let start = Coord {
            x: impact_x,
            y: impact_y,
        };
        let (end_x, end_y) = dir_to_line(impact_x, impact_y, angle, RAY_LENGTH);
        let end = Coord { x: end_x, y: end_y };

        let mirror_length = self.mirror.intersection_length(start, end);
        if mirror_length == 0.0 {
            return 0.0;
        }
        mirror_length - self.hole.intersection_length(start, end)
    }

    /// Angular light profile of a ring of `radius` seen from an impact point.
    ///
    /// Samples [`Self::intersect_polygon`] at evenly spaced angles over
    /// `[0, 2π]` (both ends included), then applies a periodic moving average
    /// of `oversample_bins` samples. Returns `(angles, lengths)`, index-aligned.
    ///
    /// # Errors
    /// * `MuonError::InvalidRadius` - radius is NaN or infinite
    /// * `MuonError::TooFewAngularBins` - the radius is too small for two samples
    /// * `MuonError::TooManyAngularBins` - the radius needs more than
    ///   [`MAX_ANGULAR_BINS`] samples
    pub fn plot_pos(
        &self,
        impact_x: f64,
        impact_y: f64,
        radius: f64,
    ) -> Result<(Vec<f64>, Vec<f64>), MuonError> {
        if !radius.is_finite() {
            return Err(MuonError::InvalidRadius(radius));
        }

        let bins = self.angular_bins(radius);
        if bins < 2 {
            return Err(MuonError::TooFewAngularBins { radius, bins });
        }
        if bins > MAX_ANGULAR_BINS {
            return Err(MuonError::TooManyAngularBins {
                radius,
                bins,
                limit: MAX_ANGULAR_BINS,
            });
        }
        log::debug!("sampling muon profile at {bins} angles for radius {radius}");

        let angles = linspace(0.0, 2.0 * PI, bins);
        let lengths: Vec<f64> = angles
            .par_iter()
            .map(|&angle| self.intersect_polygon(impact_x, impact_y, angle))
            .collect();

        let smoothed = circular_moving_average(&lengths, self.oversample_bins);
        Ok((angles, smoothed))
    }

    /// Predicted brightness of each pixel for one muon ring.
    ///
    /// Each pixel's angle around the ring centre, shifted by π, is looked up in
    /// the angular profile from [`Self::plot_pos`]. The result is multiplied by
    /// a Gaussian in the pixel's distance from the ring line:
    ///
    /// ```text
    /// exp(-(ring_dist / width)^2) / sqrt(2π width^2)
    /// ```
    ///
    /// # Errors
    /// * `MuonError::InvalidRingWidth` - width is zero, NaN or infinite
    /// * `MuonError::MismatchedPixelArrays` - `pixel_x`, `pixel_y` differ in length
    /// * any error of [`Self::plot_pos`]
    #[allow(clippy::too_many_arguments)]
    pub fn image_prediction(
        &self,
        impact_x: f64,
        impact_y: f64,
        centre_x: f64,
        centre_y: f64,
        radius: f64,
        width: f64,
        pixel_x: ArrayView1<f64>,
        pixel_y: ArrayView1<f64>,
    ) -> Result<Array1<f64>, MuonError> {
        if width == 0.0 || !width.is_finite() {
            return Err(MuonError::InvalidRingWidth(width));
        }
        if pixel_x.len() != pixel_y.len() {
            return Err(MuonError::MismatchedPixelArrays(
                pixel_x.len(),
                pixel_y.len(),
            ));
        }

        let angles: Vec<f64> = pos_to_angle_array(centre_x, centre_y, pixel_x, pixel_y)
            .iter()
            .map(|a| a + PI)
            .collect();

        let (profile_angles, profile) = self.plot_pos(impact_x, impact_y, radius)?;
        let intensity = interp_clamped(&angles, &profile_angles, &profile)?;

        let norm = (2.0 * PI * width * width).sqrt();
        let ring = MuonRing::new(centre_x, centre_y, radius, width);

        let mut pred = Array1::from(intensity);
        Zip::from(&mut pred)
            .and(&pixel_x)
            .and(&pixel_y)
            .for_each(|p, &x, &y| {
                let ring_dist = ring.ring_distance(x, y);
                *p *= (-(ring_dist / width).powi(2)).exp() / norm;
            });

        Ok(pred)
    }

    /// [`Self::image_prediction`] with grouped event parameters.
    pub fn predict(
        &self,
        impact: ImpactPoint,
        ring: &MuonRing,
        pixel_x: ArrayView1<f64>,
        pixel_y: ArrayView1<f64>,
    ) -> Result<Array1<f64>, MuonError> {
        self.image_prediction(
            impact.x,
            impact.y,
            ring.centre_x,
            ring.centre_y,
            ring.radius,
            ring.width,
            pixel_x,
            pixel_y,
        )
    }

    /// Predicted image over every pixel of a camera, index-aligned with its
    /// pixel arrays.
    pub fn predict_camera(
        &self,
        impact: ImpactPoint,
        ring: &MuonRing,
        geometry: &CameraGeometry,
    ) -> Result<Array1<f64>, MuonError> {
        self.predict(impact, ring, geometry.pix_x().view(), geometry.pix_y().view())
    }
}
