use serde::{Serialize, Deserialize};

/// Snapshot of one training iteration, taken before that iteration's updates.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `IterationStats` per iteration. Receivers use it to print
/// progress reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 0-based iteration number.
    pub iteration: usize,
    pub learning_rate: f64,
    pub weights: Vec<f64>,
    pub bias: f64,
    /// One entry per sample, in sample order.
    pub weighted_sums: Vec<f64>,
    pub outputs: Vec<f64>,
    pub expected: Vec<f64>,
    pub errors: Vec<f64>,
    /// Σ error² over all samples.
    pub squared_error: f64,
    /// Squared error of the previous iteration; `None` on iteration 0.
    pub previous_squared_error: Option<f64>,
    /// `previous_squared_error - squared_error`; `None` on iteration 0.
    pub gain: Option<f64>,
}
