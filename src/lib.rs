pub mod error;
pub mod math;
pub mod activation;
pub mod perceptron;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use error::{KisnnError, Result};
pub use activation::activation::{activate, ActivationKind};
pub use perceptron::perceptron::Perceptron;
pub use perceptron::weight_spec::{BiasSpec, WeightSpec};
pub use network::multilayer::MultilayerPerceptron;
pub use network::network::NeuralNetwork;
pub use network::spec::TopologySpec;
pub use network::widths::StageWidths;
pub use loss::squared_error::SquaredError;
pub use train::loop_fn::{train_until_converged, TrainOutcome};
pub use train::train_config::TrainConfig;
pub use train::iteration_stats::IterationStats;
