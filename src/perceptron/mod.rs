pub mod perceptron;
pub mod weight_spec;

pub use perceptron::Perceptron;
pub use weight_spec::{BiasSpec, WeightSpec};
