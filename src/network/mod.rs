pub mod multilayer;
pub mod network;
pub mod spec;
pub mod widths;

pub use multilayer::MultilayerPerceptron;
pub use network::NeuralNetwork;
pub use spec::TopologySpec;
pub use widths::StageWidths;
