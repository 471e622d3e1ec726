use neurite::train_neuron;

fn main() {
    let input = [0.1, 0.2, 0.7];
    let target = 0.5;

    let (weights, bias) = train_neuron(1000, &input, target);

    println!("Final weights: {weights:?}");
    println!("Final bias: {bias}");
}
