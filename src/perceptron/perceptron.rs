use std::fmt;

use log::trace;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationKind;
use crate::error::{KisnnError, Result};
use crate::math::rounding::{round_to, WEIGHTED_SUM_DIGITS};
use crate::perceptron::weight_spec::{BiasSpec, WeightSpec};

/// A single linear unit: weighted sum of the inputs plus a bias, passed
/// through an activation function.
///
/// The bias is kept apart from `weights` so that `weights[i]` always lines
/// up with `inputs[i]`. The fan-in is the length of `weights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PerceptronParams")]
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
    default_activation: ActivationKind,
}

/// Unchecked serialized form; becomes a `Perceptron` only through `TryFrom`.
#[derive(Deserialize)]
struct PerceptronParams {
    weights: Vec<f64>,
    bias: f64,
    #[serde(default)]
    default_activation: ActivationKind,
}

impl TryFrom<PerceptronParams> for Perceptron {
    type Error = KisnnError;

    fn try_from(params: PerceptronParams) -> Result<Self> {
        if params.weights.is_empty() {
            return Err(KisnnError::ZeroInputCount);
        }
        Ok(Perceptron {
            weights: params.weights,
            bias: params.bias,
            default_activation: params.default_activation,
        })
    }
}

impl Perceptron {
    /// Creates a perceptron with random weights and bias drawn from `[-1, 1)`.
    pub fn new(input_count: usize) -> Result<Perceptron> {
        Perceptron::with_rng(input_count, WeightSpec::Random, BiasSpec::Random, &mut rand::thread_rng())
    }

    /// Creates a perceptron from explicit weight and bias specifications.
    ///
    /// ```
    /// use kisnn::Perceptron;
    ///
    /// let p = Perceptron::with_weights(3, vec![1.0, 2.0, 3.0], 0.5).unwrap();
    /// assert_eq!(p.weighted_sum(&[1.0, 1.0, 1.0]).unwrap(), 6.5);
    /// ```
    pub fn with_weights(
        input_count: usize,
        weights: impl Into<WeightSpec>,
        bias: impl Into<BiasSpec>,
    ) -> Result<Perceptron> {
        Perceptron::with_rng(input_count, weights, bias, &mut rand::thread_rng())
    }

    /// Same as [`Perceptron::with_weights`] but draws any random values from `rng`.
    pub fn with_rng<R: Rng>(
        input_count: usize,
        weights: impl Into<WeightSpec>,
        bias: impl Into<BiasSpec>,
        rng: &mut R,
    ) -> Result<Perceptron> {
        if input_count == 0 {
            return Err(KisnnError::ZeroInputCount);
        }
        let weights = weights.into().resolve(input_count, rng)?;
        let bias = bias.into().resolve(rng);

        Ok(Perceptron {
            weights,
            bias,
            default_activation: ActivationKind::default(),
        })
    }

    /// Sets the activation used by [`output`](Self::output) and [`learn`](Self::learn).
    pub fn with_default_activation(mut self, activation: ActivationKind) -> Perceptron {
        self.default_activation = activation;
        self
    }

    pub fn set_default_activation(&mut self, activation: ActivationKind) {
        self.default_activation = activation;
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn default_activation(&self) -> ActivationKind {
        self.default_activation
    }

    /// `Σ(inputs[i] * weights[i]) + bias`, rounded to 10 decimal digits.
    pub fn weighted_sum(&self, inputs: &[f64]) -> Result<f64> {
        self.check_inputs(inputs)?;

        let sum: f64 = inputs.iter().zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();

        Ok(round_to(sum + self.bias, WEIGHTED_SUM_DIGITS))
    }

    /// Output under the perceptron's default activation.
    pub fn output(&self, inputs: &[f64]) -> Result<f64> {
        self.output_with(inputs, self.default_activation)
    }

    pub fn output_with(&self, inputs: &[f64], activation: ActivationKind) -> Result<f64> {
        Ok(activation.activate(self.weighted_sum(inputs)?))
    }

    /// One online training step under the default activation.
    pub fn learn(&mut self, inputs: &[f64], expected: f64, learning_rate: f64) -> Result<()> {
        self.learn_with(inputs, expected, learning_rate, self.default_activation)
    }

    /// Guesses, measures `error = expected - guess` and applies the delta rule.
    pub fn learn_with(
        &mut self,
        inputs: &[f64],
        expected: f64,
        learning_rate: f64,
        activation: ActivationKind,
    ) -> Result<()> {
        let guess = self.output_with(inputs, activation)?;
        let error = expected - guess;
        self.adjust_weights(error, inputs, learning_rate)
    }

    /// Delta rule: `w[i] += error * inputs[i] * learning_rate`, `bias += error * learning_rate`.
    pub fn adjust_weights(&mut self, error: f64, inputs: &[f64], learning_rate: f64) -> Result<()> {
        self.check_inputs(inputs)?;

        for (weight, input) in self.weights.iter_mut().zip(inputs.iter()) {
            *weight += error * input * learning_rate;
        }
        self.bias += error * learning_rate;

        trace!("adjusted weights: error={error} weights={:?} bias={}", self.weights, self.bias);
        Ok(())
    }

    fn check_inputs(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.input_count() {
            return Err(KisnnError::InputCountMismatch {
                expected: self.input_count(),
                actual: inputs.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Perceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of inputs: {}", self.input_count())?;
        writeln!(f, "Weights: {:?}", self.weights)?;
        write!(f, "Bias: {:?}", self.bias)
    }
}
