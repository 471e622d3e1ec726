pub mod math;
pub mod activation;
pub mod neuron;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use loss::squared_error::SquaredErrorLoss;
pub use neuron::Neuron;
pub use optim::sgd::Sgd;
pub use train::{train_loop, train_neuron, EpochSnapshot, TrainConfig, LEARNING_RATE};
