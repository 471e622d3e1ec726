use crate::neuron::Neuron;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD update to a neuron given its pre-computed gradients.
    pub fn step<const N: usize>(
        &self,
        neuron: &mut Neuron<N>,
        weights_grad: [f64; N],
        bias_grad: f64,
    ) {
        neuron.apply_gradients(weights_grad, bias_grad, self.learning_rate);
    }
}
