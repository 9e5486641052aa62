use kisnn::{MultilayerPerceptron, NeuralNetwork};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("A neural network:");
    println!("{}\n", NeuralNetwork::new(4, 4, 1)?);

    println!("A MLP:");
    println!("{}\n", MultilayerPerceptron::build(4, 1, 3, [5, 6, 2])?);

    println!("Another MLP:");
    println!("{}", MultilayerPerceptron::build(3, 2, 4, 5)?);
    Ok(())
}
