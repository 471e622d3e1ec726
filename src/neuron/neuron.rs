use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::activation::{sigmoid, sigmoid_derivative};
use crate::math::{dot, xavier};

/// A single artificial neuron with `N` inputs: `N` weights plus one bias.
///
/// The input dimension lives in the type, so a mismatched input vector is a
/// compile error rather than a runtime shape failure.
#[derive(Debug, Clone)]
pub struct Neuron<const N: usize> {
    pub weights: [f64; N],
    pub bias: f64,
}

impl<const N: usize> Neuron<N> {
    /// Creates a neuron with Xavier-initialized weights and a zero bias.
    ///
    /// Fan-out is 1: the neuron's single output feeds nothing downstream.
    pub fn new() -> Neuron<N> {
        Neuron {
            weights: xavier(1, &mut rand::thread_rng()),
            bias: 0.0,
        }
    }

    /// Like [`Neuron::new`] but seeded: equal seeds give bit-identical
    /// weights across runs.
    pub fn from_seed(seed: u64) -> Neuron<N> {
        Neuron {
            weights: xavier(1, &mut StdRng::seed_from_u64(seed)),
            bias: 0.0,
        }
    }

    /// Creates a neuron from explicit parameters.
    pub fn with_weights(weights: [f64; N], bias: f64) -> Neuron<N> {
        Neuron { weights, bias }
    }

    /// Linear pass: z = w·x + b.
    pub fn pre_activation(&self, input: &[f64; N]) -> f64 {
        dot(&self.weights, input) + self.bias
    }

    /// Forward pass: a = σ(w·x + b).
    pub fn forward(&self, input: &[f64; N]) -> f64 {
        sigmoid(self.pre_activation(input))
    }

    /// Chain-rule gradients of the squared-error loss with respect to the
    /// weights and bias.
    ///
    /// `error` is ∂L/∂a = (a − y); `activation` is the output `a` from the
    /// same forward pass. With δ = (a − y) · a · (1 − a):
    /// ∂L/∂w_i = δ · x_i and ∂L/∂b = δ.
    pub fn compute_gradients(
        &self,
        error: f64,
        activation: f64,
        input: &[f64; N],
    ) -> ([f64; N], f64) {
        let delta = error * sigmoid_derivative(activation);
        let mut weights_grad = [0.0; N];
        for i in 0..N {
            weights_grad[i] = delta * input[i];
        }
        (weights_grad, delta)
    }

    /// Moves the parameters one step against the gradient, in place.
    pub fn apply_gradients(&mut self, weights_grad: [f64; N], bias_grad: f64, lr: f64) {
        for i in 0..N {
            self.weights[i] -= lr * weights_grad[i];
        }
        self.bias -= lr * bias_grad;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_starts_at_exactly_zero() {
        let n: Neuron<3> = Neuron::new();
        assert_eq!(n.bias, 0.0);
        let s: Neuron<3> = Neuron::from_seed(11);
        assert_eq!(s.bias, 0.0);
    }

    #[test]
    fn seeded_construction_is_deterministic() {
        let a: Neuron<3> = Neuron::from_seed(99);
        let b: Neuron<3> = Neuron::from_seed(99);
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.bias, b.bias);
    }

    #[test]
    fn forward_with_zero_weights_is_one_half() {
        let n = Neuron::with_weights([0.0; 3], 0.0);
        assert_eq!(n.pre_activation(&[1.0, 0.0, 0.0]), 0.0);
        assert_eq!(n.forward(&[1.0, 0.0, 0.0]), 0.5);
    }

    #[test]
    fn gradient_check_single_iteration() {
        // w = 0, b = 0, x = [1, 0, 0], y = 1:
        // z = 0, a = 0.5, δ = (0.5 − 1) · 0.5 · 0.5 = −0.125.
        let n = Neuron::with_weights([0.0; 3], 0.0);
        let x = [1.0, 0.0, 0.0];
        let a = n.forward(&x);
        let (w_grad, b_grad) = n.compute_gradients(a - 1.0, a, &x);
        assert_eq!(w_grad, [-0.125, 0.0, 0.0]);
        assert_eq!(b_grad, -0.125);
    }

    #[test]
    fn apply_gradients_moves_against_the_gradient() {
        let mut n = Neuron::with_weights([0.0; 3], 0.0);
        n.apply_gradients([-0.125, 0.0, 0.0], -0.125, 0.005);
        assert!((n.weights[0] - 0.000625).abs() < 1e-12);
        assert_eq!(n.weights[1], 0.0);
        assert_eq!(n.weights[2], 0.0);
        assert!((n.bias - 0.000625).abs() < 1e-12);
    }
}
