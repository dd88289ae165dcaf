//! Muon ring image prediction tool
//!
//! Predicts the image of one muon ring on a synthetic rectangular camera and
//! prints the brightest pixels.
//!
//! # Usage
//!
//! ```bash
//! # Default 12 m mirror, ring centred on the camera
//! cargo run --release --bin muon_predict
//!
//! # Off-axis impact with a central hole, ring shifted
//! cargo run --release --bin muon_predict -- --impact-x 4.0 --hole-radius 1.5 --centre-x 0.1
//!
//! # Sampling parameters from a JSON file
//! cargo run --release --bin muon_predict -- --config integrator.json
//! ```

use anyhow::Context;
use camera::units::{Angle, AngleExt};
use camera::{make_rectangular_camera_geometry, RectangularGridConfig};
use clap::Parser;
use muon::{regular_polygon, ImpactPoint, MuonIntegratorConfig, MuonLineIntegrate, MuonRing};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Predict a muon ring image on a rectangular camera", long_about = None)]
struct Args {
    /// Muon impact point x on the mirror
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    impact_x: f64,

    /// Muon impact point y on the mirror
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    impact_y: f64,

    /// Ring centre x in the camera
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    centre_x: f64,

    /// Ring centre y in the camera
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    centre_y: f64,

    /// Ring radius in the camera
    #[arg(long, default_value_t = 0.3)]
    radius: f64,

    /// Gaussian width of the ring cross-section
    #[arg(long, default_value_t = 0.02)]
    width: f64,

    /// Mirror circumradius
    #[arg(long, default_value_t = 12.0)]
    mirror_radius: f64,

    /// Number of mirror outline sides
    #[arg(long, default_value_t = 36)]
    mirror_sides: usize,

    /// Central hole circumradius, 0 for no hole
    #[arg(long, default_value_t = 0.0)]
    hole_radius: f64,

    /// Camera pixels along each axis
    #[arg(long, default_value_t = 40)]
    npix: usize,

    /// Rotate the camera by this many degrees before predicting
    #[arg(long, allow_hyphen_values = true)]
    rotate_deg: Option<f64>,

    /// JSON file with integrator sampling parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the pixel width used for angular sampling
    #[arg(long)]
    pixel_width: Option<f64>,

    /// Override the oversampling factor
    #[arg(long)]
    oversample: Option<usize>,

    /// Number of brightest pixels to print
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn load_config(args: &Args) -> anyhow::Result<MuonIntegratorConfig> {
    let mut config = match &args.config {
        Some(path) => MuonIntegratorConfig::load_from_file(path)
            .with_context(|| format!("reading integrator config {}", path.display()))?,
        None => MuonIntegratorConfig::default(),
    };
    if let Some(pixel_width) = args.pixel_width {
        config.pixel_width = pixel_width;
    }
    if let Some(oversample) = args.oversample {
        config.oversample_bins = oversample;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    log::info!(
        "integrator: pixel_width={} oversample_bins={}",
        config.pixel_width,
        config.oversample_bins
    );

    let mirror = regular_polygon(args.mirror_sides, args.mirror_radius, (0.0, 0.0));
    let hole = regular_polygon(args.mirror_sides, args.hole_radius, (0.0, 0.0));
    let integrator = MuonLineIntegrate::new(&mirror, &hole, &config)?;

    let mut camera = make_rectangular_camera_geometry(&RectangularGridConfig {
        npix_x: args.npix,
        npix_y: args.npix,
        ..RectangularGridConfig::default()
    })?;
    if let Some(deg) = args.rotate_deg {
        camera.rotate(Angle::from_degrees(deg));
    }
    log::info!(
        "camera {} with {} {} pixels",
        camera.cam_id(),
        camera.n_pixels(),
        camera.pix_type()
    );

    let impact = ImpactPoint::new(args.impact_x, args.impact_y);
    let ring = MuonRing::new(args.centre_x, args.centre_y, args.radius, args.width);
    let image = integrator.predict_camera(impact, &ring, &camera)?;

    let total: f64 = image.sum();
    println!(
        "Predicted ring: centre ({:.3}, {:.3}), radius {:.3}, width {:.3}",
        ring.centre_x, ring.centre_y, ring.radius, ring.width
    );
    println!("Total predicted intensity: {total:.4}");

    let mut order: Vec<usize> = (0..image.len()).collect();
    order.sort_by(|&a, &b| image[b].total_cmp(&image[a]));

    println!("\npix_id\tx\ty\tintensity");
    for &i in order.iter().take(args.top) {
        println!(
            "{}\t{:.4}\t{:.4}\t{:.6}",
            camera.pix_id()[i],
            camera.pix_x()[i],
            camera.pix_y()[i],
            image[i]
        );
    }

    Ok(())
}
