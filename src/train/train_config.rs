/// Progress lines are printed every `DEFAULT_LOG_EVERY` epochs.
pub const DEFAULT_LOG_EVERY: usize = 100;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`    — number of forward/backward/update iterations; `0` is a
///                 legal no-op run
/// - `log_every` — print one progress line per `log_every` epochs, starting
///                 at epoch 0; must be at least 1
pub struct TrainConfig {
    pub epochs: usize,
    pub log_every: usize,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the default progress cadence.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            log_every: DEFAULT_LOG_EVERY,
        }
    }
}
