use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::error::{KisnnError, Result};
use crate::loss::squared_error::SquaredError;
use crate::perceptron::perceptron::Perceptron;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;

/// Result of a `train_until_converged` run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainOutcome {
    /// Number of iterations that were evaluated.
    pub iterations: usize,
    /// Squared error measured by the last evaluated iteration.
    pub squared_error: f64,
    /// Whether `squared_error` reached `target_squared_error`.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains a single perceptron online, one `learn` call per sample, until the
/// summed squared error drops to `config.target_squared_error` or the
/// iteration counter passes `config.max_iterations`.
///
/// Each iteration first evaluates every sample, reports the snapshot through
/// `config.progress_tx`, and only then applies the updates.
///
/// # Errors
/// `SampleCountMismatch` if `inputs` and `answers` differ in length, and
/// `InputCountMismatch` if any sample does not match the perceptron's fan-in.
/// Both are checked before the perceptron is touched.
pub fn train_until_converged(
    perceptron: &mut Perceptron,
    inputs: &[Vec<f64>],
    answers: &[f64],
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    if inputs.len() != answers.len() {
        return Err(KisnnError::SampleCountMismatch {
            inputs: inputs.len(),
            answers: answers.len(),
        });
    }
    if let Some(bad) = inputs.iter().find(|input| input.len() != perceptron.input_count()) {
        return Err(KisnnError::InputCountMismatch {
            expected: perceptron.input_count(),
            actual: bad.len(),
        });
    }

    let mut squared_error = 1.0;
    let mut iteration = 0;
    let mut evaluated = 0;

    while squared_error > config.target_squared_error && iteration <= config.max_iterations {
        // ── Evaluate before learning ───────────────────────────────────────
        let (weighted_sums, outputs) = evaluate(perceptron, inputs, config)?;
        let errors = SquaredError::errors(&outputs, answers);

        let previous = squared_error;
        squared_error = SquaredError::total(&errors);
        evaluated = iteration + 1;

        let stats = IterationStats {
            iteration,
            learning_rate: config.learning_rate,
            weights: perceptron.weights().to_vec(),
            bias: perceptron.bias(),
            weighted_sums,
            outputs,
            expected: answers.to_vec(),
            errors,
            squared_error,
            previous_squared_error: (iteration != 0).then_some(previous),
            gain: (iteration != 0).then_some(previous - squared_error),
        };

        // ── Emit progress ─────────────────────────────────────────────────
        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                debug!("progress receiver dropped, stopping at iteration {iteration}");
                break;
            }
        }

        // ── One online pass ────────────────────────────────────────────────
        for (input, &answer) in inputs.iter().zip(answers.iter()) {
            perceptron.learn_with(input, answer, config.learning_rate, config.activation)?;
        }

        iteration += 1;
    }

    let converged = squared_error <= config.target_squared_error;
    if converged {
        info!("converged after {evaluated} iterations, squared error {squared_error}");
    } else {
        debug!("stopped after {evaluated} iterations, squared error {squared_error}");
    }

    Ok(TrainOutcome {
        iterations: evaluated,
        squared_error,
        converged,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Weighted sum and activated output of every sample.
fn evaluate(
    perceptron: &Perceptron,
    inputs: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let weighted_sums = inputs.iter()
        .map(|input| perceptron.weighted_sum(input))
        .collect::<Result<Vec<f64>>>()?;
    let outputs = weighted_sums.iter()
        .map(|&sum| config.activation.activate(sum))
        .collect();
    Ok((weighted_sums, outputs))
}
