//! 2D rotation of coordinate arrays using nalgebra

use nalgebra::{Matrix2, Vector2};
use ndarray::{Array1, ArrayView1, Zip};

/// Standard counter-clockwise 2x2 rotation matrix for `angle` radians.
///
/// ```text
/// | cos  -sin |
/// | sin   cos |
/// ```
pub fn rotation_matrix_2d(angle: f64) -> Matrix2<f64> {
    let (sin_a, cos_a) = angle.sin_cos();
    Matrix2::new(cos_a, -sin_a, sin_a, cos_a)
}

/// Rotate paired coordinate arrays about the origin.
///
/// Applies the transpose of [`rotation_matrix_2d`] to every `(x, y)` pair, so a
/// positive angle turns points clockwise:
///
/// ```text
/// x' =  cos(a) * x + sin(a) * y
/// y' = -sin(a) * x + cos(a) * y
/// ```
///
/// Both inputs must have the same length; the output arrays are index-aligned
/// with the inputs.
pub fn rotate_points(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    angle: f64,
) -> (Array1<f64>, Array1<f64>) {
    let rot_t = rotation_matrix_2d(angle).transpose();

    let mut out_x = Array1::zeros(x.len());
    let mut out_y = Array1::zeros(y.len());

    Zip::from(&mut out_x)
        .and(&mut out_y)
        .and(&x)
        .and(&y)
        .for_each(|ox, oy, &px, &py| {
            let rotated = rot_t * Vector2::new(px, py);
            *ox = rotated.x;
            *oy = rotated.y;
        });

    (out_x, out_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotation_matrix_quarter_turn() {
        let m = rotation_matrix_2d(FRAC_PI_2);
        let v = m * Vector2::new(1.0, 0.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_points_is_clockwise() {
        let x = array![0.0, 1.0];
        let y = array![1.0, 0.0];
        let (rx, ry) = rotate_points(x.view(), y.view(), FRAC_PI_2);
        assert_relative_eq!(rx[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(ry[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(rx[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(ry[1], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_and_back() {
        let x = array![0.3, -1.2, 4.5, 0.0];
        let y = array![2.0, 0.7, -3.3, 0.0];
        let (rx, ry) = rotate_points(x.view(), y.view(), 0.77);
        let (bx, by) = rotate_points(rx.view(), ry.view(), -0.77);
        for i in 0..x.len() {
            assert_relative_eq!(bx[i], x[i], epsilon = 1e-12);
            assert_relative_eq!(by[i], y[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_half_turn_negates() {
        let x = array![1.5, -2.0];
        let y = array![0.5, 3.0];
        let (rx, ry) = rotate_points(x.view(), y.view(), PI);
        assert_relative_eq!(rx[0], -1.5, epsilon = 1e-12);
        assert_relative_eq!(ry[1], -3.0, epsilon = 1e-12);
    }
}
