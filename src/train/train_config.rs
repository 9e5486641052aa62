use std::sync::mpsc;

use crate::activation::activation::ActivationKind;
use crate::train::iteration_stats::IterationStats;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_TARGET_SQUARED_ERROR: f64 = 0.1;

/// Configuration for a `train_until_converged` run.
///
/// # Fields
/// - `learning_rate`        : scale of every delta-rule update
/// - `max_iterations`       : the loop gives up once the iteration counter exceeds this
/// - `target_squared_error` : the loop stops once the summed squared error is at or below this
/// - `activation`           : activation used both to evaluate and to learn
/// - `progress_tx`          : optional channel sender; one `IterationStats` is sent per
///                            iteration. If the receiver is dropped the loop
///                            terminates early.
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub target_squared_error: f64,
    pub activation: ActivationKind,
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the default limits and no progress channel.
    pub fn new(learning_rate: f64, activation: ActivationKind) -> Self {
        TrainConfig {
            learning_rate,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            target_squared_error: DEFAULT_TARGET_SQUARED_ERROR,
            activation,
            progress_tx: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_target_squared_error(mut self, target: f64) -> Self {
        self.target_squared_error = target;
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<IterationStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
