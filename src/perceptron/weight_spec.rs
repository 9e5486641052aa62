use rand::Rng;
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::error::{KisnnError, Result};

/// Range initial weights and biases are drawn from: `[-1, 1)`.
pub const INIT_LOW: f64 = -1.0;
pub const INIT_HIGH: f64 = 1.0;

/// How a perceptron's weights are initialised.
///
/// Resolved once, at construction; each perceptron gets its own fresh vector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSpec {
    /// Every weight drawn independently and uniformly from `[-1, 1)`.
    #[default]
    Random,
    /// The same value for every input.
    Broadcast(f64),
    /// One value per input.
    Explicit(Vec<f64>),
}

impl WeightSpec {
    /// Interprets loosely-typed configuration: `null` is random, a number is
    /// broadcast and an array of numbers is explicit.
    pub fn from_json(value: &Value) -> Result<WeightSpec> {
        match value {
            Value::Null => Ok(WeightSpec::Random),
            Value::Number(n) => n
                .as_f64()
                .map(WeightSpec::Broadcast)
                .ok_or_else(|| KisnnError::InvalidWeightSpec(format!("{n} is not representable as f64"))),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_f64().ok_or_else(|| {
                        KisnnError::InvalidWeightSpec(format!("weight {item} is not a number"))
                    })
                })
                .collect::<Result<Vec<f64>>>()
                .map(WeightSpec::Explicit),
            other => Err(KisnnError::InvalidWeightSpec(format!(
                "expected null, a number or a list of numbers, got {other}"
            ))),
        }
    }

    /// Produces exactly `input_count` weights.
    pub fn resolve<R: Rng>(&self, input_count: usize, rng: &mut R) -> Result<Vec<f64>> {
        match self {
            WeightSpec::Random => Ok((0..input_count).map(|_| sample_uniform(&mut *rng)).collect()),
            WeightSpec::Broadcast(value) => Ok(vec![*value; input_count]),
            WeightSpec::Explicit(weights) => {
                if weights.len() != input_count {
                    return Err(KisnnError::WeightCountMismatch {
                        expected: input_count,
                        actual: weights.len(),
                    });
                }
                Ok(weights.clone())
            }
        }
    }
}

impl From<f64> for WeightSpec {
    fn from(value: f64) -> Self {
        WeightSpec::Broadcast(value)
    }
}

impl From<Vec<f64>> for WeightSpec {
    fn from(weights: Vec<f64>) -> Self {
        WeightSpec::Explicit(weights)
    }
}

impl From<&[f64]> for WeightSpec {
    fn from(weights: &[f64]) -> Self {
        WeightSpec::Explicit(weights.to_vec())
    }
}

/// How a perceptron's bias is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasSpec {
    #[default]
    Random,
    Value(f64),
}

impl BiasSpec {
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            BiasSpec::Random => sample_uniform(rng),
            BiasSpec::Value(bias) => *bias,
        }
    }
}

impl From<f64> for BiasSpec {
    fn from(bias: f64) -> Self {
        BiasSpec::Value(bias)
    }
}

impl From<Option<f64>> for BiasSpec {
    fn from(bias: Option<f64>) -> Self {
        bias.map_or(BiasSpec::Random, BiasSpec::Value)
    }
}

fn sample_uniform<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(INIT_LOW..INIT_HIGH)
}
