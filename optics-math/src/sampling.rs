//! Sample grids and periodic smoothing.

/// `n` evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// Returns an empty vector for `n == 0` and `[start]` for `n == 1`. The last
/// sample is exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = stop;
            samples
        }
    }
}

/// Moving sum of `window` samples with periodic boundaries.
///
/// The window covers offsets `-window/2 .. window - window/2` around each
/// sample, indices wrap modulo the input length. A window longer than the
/// input wraps around more than once.
pub fn circular_moving_sum(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let half = (window / 2) as isize;
    let len = n as isize;

    (0..len)
        .map(|i| {
            (0..window as isize)
                .map(|j| values[(i + j - half).rem_euclid(len) as usize])
                .sum()
        })
        .collect()
}

/// Periodic moving average: [`circular_moving_sum`] divided by `window`.
///
/// A zero window leaves the input unchanged.
pub fn circular_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return values.to_vec();
    }

    let scale = window as f64;
    circular_moving_sum(values, window)
        .into_iter()
        .map(|v| v / scale)
        .collect()
}
