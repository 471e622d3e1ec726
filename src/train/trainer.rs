use crate::neuron::neuron::Neuron;
use crate::optim::sgd::Sgd;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Fixed gradient-descent step size.
pub const LEARNING_RATE: f64 = 0.005;

/// Trains a freshly initialized neuron on a single `(input, target)`
/// example and returns the final weights and bias.
///
/// Weights start Xavier-initialized from the thread RNG (so two calls give
/// different results); the bias starts at 0. For deterministic runs build a
/// [`Neuron::from_seed`] and call [`train_loop`] directly.
pub fn train_neuron<const N: usize>(
    epochs: usize,
    input: &[f64; N],
    target: f64,
) -> ([f64; N], f64) {
    let mut neuron: Neuron<N> = Neuron::new();
    let optimizer = Sgd::new(LEARNING_RATE);
    let config = TrainConfig::new(epochs);

    train_loop(&mut neuron, input, target, &optimizer, &config);

    (neuron.weights, neuron.bias)
}
