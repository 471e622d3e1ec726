pub mod trainer;
pub mod snapshot;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{train_neuron, LEARNING_RATE};
pub use snapshot::EpochSnapshot;
pub use train_config::{TrainConfig, DEFAULT_LOG_EVERY};
pub use loop_fn::train_loop;
