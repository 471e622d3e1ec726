use std::f64::consts::E;

/// Sigmoid activation: 1 / (1 + e^(-z)), mapping any real input to (0, 1).
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + E.powf(-z))
}

/// Derivative of the sigmoid in terms of its output: σ'(z) = a · (1 - a)
/// where a = σ(z).
///
/// Takes the already-computed activation `a`, not the pre-activation `z`;
/// the backward pass always has `a` at hand from the forward pass.
pub fn sigmoid_derivative(a: f64) -> f64 {
    a * (1.0 - a)
}
