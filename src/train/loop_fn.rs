use crate::loss::squared_error::SquaredErrorLoss;
use crate::neuron::neuron::Neuron;
use crate::optim::sgd::Sgd;
use crate::train::snapshot::EpochSnapshot;
use crate::train::train_config::TrainConfig;

/// Trains `neuron` on a single `(input, target)` example for
/// `config.epochs` iterations and returns the recorded progress snapshots.
///
/// Each iteration performs one forward pass, derives the chain-rule
/// gradients from the residual `a − y`, and applies one SGD step. Every
/// `config.log_every` epochs (starting at epoch 0) a progress line is
/// printed to stdout and the matching [`EpochSnapshot`] is recorded.
///
/// There is no early stopping and no convergence check; the loop always
/// runs exactly `config.epochs` iterations.
///
/// # Panics
/// Panics if `config.log_every == 0`.
pub fn train_loop<const N: usize>(
    neuron: &mut Neuron<N>,
    input: &[f64; N],
    target: f64,
    optimizer: &Sgd,
    config: &TrainConfig,
) -> Vec<EpochSnapshot> {
    assert!(config.log_every > 0, "log_every must be at least 1");

    let mut snapshots = Vec::new();

    for epoch in 0..config.epochs {
        // Forward pass
        let activation = neuron.forward(input);

        // Initial delta: ∂L/∂a = a − y
        let error = SquaredErrorLoss::derivative(activation, target);

        // Backward pass and update
        let (weights_grad, bias_grad) = neuron.compute_gradients(error, activation, input);
        optimizer.step(neuron, weights_grad, bias_grad);

        if epoch % config.log_every == 0 {
            let snapshot = EpochSnapshot {
                epoch,
                weights: neuron.weights.to_vec(),
                bias: neuron.bias,
                squared_error: error * error,
            };
            println!("{snapshot}");
            snapshots.push(snapshot);
        }
    }

    snapshots
}
