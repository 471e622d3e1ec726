use std::fmt;

use serde::{Serialize, Deserialize};

/// Periodic training diagnostics emitted by `train_loop`.
///
/// One snapshot is recorded (and its `Display` line printed) per
/// `log_every` epochs. The weights and bias are the values after that
/// epoch's update; the squared error comes from the same epoch's forward
/// pass, i.e. from before the update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochSnapshot {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Weights after this epoch's update.
    pub weights: Vec<f64>,
    /// Bias after this epoch's update.
    pub bias: f64,
    /// Squared error (a − y)² from this epoch's forward pass.
    pub squared_error: f64,
}

/// Renders the progress line:
/// `Epoch {i}: w = [0.123%, ...], b = [0.000%], loss = [0.140%]`
///
/// Every number is formatted to 3 decimal places with a `%` suffix. The
/// suffix is cosmetic, carried over from the original output format; the
/// values are not percentages.
impl fmt::Display for EpochSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch {}: w = [", self.epoch)?;
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{w:.3}%")?;
        }
        write!(
            f,
            "], b = [{:.3}%], loss = [{:.3}%]",
            self.bias, self.squared_error
        )
    }
}
