use rand::Rng;
use std::f64::consts::PI;

/// Dot product of two N-dimensional vectors.
///
/// Both operands carry their dimension in the type, so mismatched shapes
/// are rejected at compile time rather than at arithmetic time.
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    let mut sum = 0.0;
    for i in 0..N {
        sum += a[i] * b[i];
    }
    sum
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
/// Both u1 and u2 must be uniform on (0, 1].
fn sample_standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // Draw two independent uniform samples in (0, 1] to avoid log(0).
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Xavier (Glorot) initialization: samples from N(0, sqrt(2 / (fan_in + fan_out))).
///
/// Recommended before sigmoid layers. Keeps the variance of activations and
/// gradients roughly balanced between the input and output side.
///
/// `N` is the fan-in (input dimension); `n_out` is the fan-out (number of
/// neurons the weights feed).
pub fn xavier<const N: usize, R: Rng>(n_out: usize, rng: &mut R) -> [f64; N] {
    let std_dev = (2.0 / (N + n_out) as f64).sqrt();
    let mut weights = [0.0; N];
    for w in &mut weights {
        *w = sample_standard_normal(rng) * std_dev;
    }
    weights
}
