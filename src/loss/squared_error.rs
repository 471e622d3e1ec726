pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// Scalar squared-error loss: ½ · (predicted − expected)²
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        0.5 * (predicted - expected).powi(2)
    }

    /// Gradient with respect to the prediction: predicted − expected
    /// (the ½ in the loss cancels the exponent's 2).
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}
