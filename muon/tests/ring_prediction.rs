use approx::assert_relative_eq;
use camera::units::{Angle, AngleExt};
use camera::{make_rectangular_camera_geometry, CameraGeometry, RectangularGridConfig};
use muon::{
    regular_polygon, ImpactPoint, MuonError, MuonIntegratorConfig, MuonLineIntegrate, MuonRing,
};
use ndarray::Array1;
use std::f64::consts::PI;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn default_camera() -> CameraGeometry {
    make_rectangular_camera_geometry(&RectangularGridConfig::default()).unwrap()
}

fn camera_matched_config() -> MuonIntegratorConfig {
    MuonIntegratorConfig {
        pixel_width: 1.0 / 39.0,
        oversample_bins: 5,
    }
}

fn circular_mirror_integrator() -> MuonLineIntegrate {
    let mirror = regular_polygon(720, 12.0, (0.0, 0.0));
    MuonLineIntegrate::new(&mirror, &[], &camera_matched_config()).unwrap()
}

#[test]
fn test_unit_square_scenario() {
    init_logging();
    let square = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let config = MuonIntegratorConfig {
        pixel_width: 0.2,
        oversample_bins: 5,
    };
    let integrator = MuonLineIntegrate::new(&square, &[], &config).unwrap();

    // ray from the centre straight up leaves the square at the top edge
    let up = integrator.intersect_polygon(0.0, 0.0, 0.0);
    assert_relative_eq!(up, 1.0, epsilon = 1e-9);

    // up and down rays together cover the whole vertical chord
    let down = integrator.intersect_polygon(0.0, 0.0, PI);
    assert_relative_eq!(up + down, 2.0, epsilon = 1e-9);
}

#[test]
fn test_camera_prediction_shape_and_sign() {
    init_logging();
    let camera = default_camera();
    let mirror = regular_polygon(36, 12.0, (0.0, 0.0));
    let hole = regular_polygon(6, 1.5, (0.0, 0.0));
    let integrator = MuonLineIntegrate::new(&mirror, &hole, &camera_matched_config()).unwrap();

    let ring = MuonRing::new(0.05, -0.03, 0.3, 0.02);
    let image = integrator
        .predict_camera(ImpactPoint::new(3.0, -2.0), &ring, &camera)
        .unwrap();

    assert_eq!(image.len(), camera.n_pixels());
    assert!(image.iter().all(|&v| v >= 0.0 && v.is_finite()));

    // the brightest pixel sits on the ring line
    let brightest = image
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    let dist = ring.ring_distance(camera.pix_x()[brightest], camera.pix_y()[brightest]);
    assert!(dist.abs() < 0.03, "brightest pixel {dist} away from ring");
}

#[test]
fn test_prediction_follows_camera_rotation() {
    let integrator = circular_mirror_integrator();
    let camera = default_camera();
    let rotated = camera.rotated(Angle::from_degrees(27.0));

    let ring = MuonRing::new(0.0, 0.0, 0.25, 0.03);
    let impact = ImpactPoint::default();

    let straight = integrator.predict_camera(impact, &ring, &camera).unwrap();
    let turned = integrator.predict_camera(impact, &ring, &rotated).unwrap();

    // centred ring and isotropic profile: every pixel keeps its brightness
    for (a, b) in straight.iter().zip(turned.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-3);
    }
    assert_eq!(rotated.neighbors(), camera.neighbors());
}

#[test]
fn test_hole_reduces_total_light() {
    let camera = default_camera();
    let mirror = regular_polygon(36, 12.0, (0.0, 0.0));
    let hole = regular_polygon(36, 3.0, (0.0, 0.0));
    let config = camera_matched_config();

    let open = MuonLineIntegrate::new(&mirror, &[], &config).unwrap();
    let blocked = MuonLineIntegrate::new(&mirror, &hole, &config).unwrap();

    let ring = MuonRing::new(0.0, 0.0, 0.3, 0.02);
    let impact = ImpactPoint::new(1.0, 0.5);

    let open_total = open.predict_camera(impact, &ring, &camera).unwrap().sum();
    let blocked_total = blocked.predict_camera(impact, &ring, &camera).unwrap().sum();
    assert!(blocked_total < open_total);
    assert!(blocked_total > 0.0);
}

#[test]
fn test_off_axis_impact_brightens_far_side() {
    let integrator = circular_mirror_integrator();
    let radius = 0.3;
    let xs = Array1::from(vec![radius, -radius]);
    let ys = Array1::from(vec![0.0, 0.0]);

    // impact 4 m towards +x: chords are 8 m towards +x and 16 m towards -x
    let pred = integrator
        .image_prediction(4.0, 0.0, 0.0, 0.0, radius, 0.02, xs.view(), ys.view())
        .unwrap();

    let ratio = pred[0] / pred[1];
    assert!((1.7..2.3).contains(&ratio), "unexpected brightness ratio {ratio}");
}

#[test]
fn test_profile_wraps_continuously() {
    let integrator = circular_mirror_integrator();
    let (angles, lengths) = integrator.plot_pos(5.0, 2.0, 0.4).unwrap();

    assert_eq!(angles.len(), integrator.angular_bins(0.4));
    assert_eq!(angles[0], 0.0);
    assert_eq!(*angles.last().unwrap(), 2.0 * PI);
    assert!(angles.windows(2).all(|w| w[1] > w[0]));

    let first = lengths[0];
    let last = *lengths.last().unwrap();
    assert_relative_eq!(first, last, max_relative = 1e-2);
}

#[test]
fn test_zero_width_is_rejected() {
    let integrator = circular_mirror_integrator();
    let camera = default_camera();
    let ring = MuonRing::new(0.0, 0.0, 0.3, 0.0);
    assert_eq!(
        integrator
            .predict_camera(ImpactPoint::default(), &ring, &camera)
            .unwrap_err(),
        MuonError::InvalidRingWidth(0.0)
    );
}
