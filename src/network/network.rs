use std::fmt;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;
use crate::perceptron::weight_spec::{BiasSpec, WeightSpec};

/// Network with one hidden layer.
///
/// Every input unit takes a single input and stands in for one raw feature.
/// Hidden units take `input_count` inputs; output units take one input per
/// hidden unit. The shape is fixed once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeuralNetwork {
    inputs: Vec<Perceptron>,
    hidden: Vec<Perceptron>,
    outputs: Vec<Perceptron>,
}

impl NeuralNetwork {
    pub fn new(input_count: usize, hidden_count: usize, output_count: usize) -> Result<NeuralNetwork> {
        NeuralNetwork::with_rng(input_count, hidden_count, output_count, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        rng: &mut R,
    ) -> Result<NeuralNetwork> {
        let inputs = random_units(input_count, 1, rng)?;
        let hidden = random_units(hidden_count, input_count, rng)?;
        let outputs = random_units(output_count, hidden_count, rng)?;

        debug!("built network: inputs={input_count} hidden={hidden_count} outputs={output_count}");

        Ok(NeuralNetwork { inputs, hidden, outputs })
    }

    pub fn input_units(&self) -> &[Perceptron] {
        &self.inputs
    }

    pub fn hidden_units(&self) -> &[Perceptron] {
        &self.hidden
    }

    pub fn output_units(&self) -> &[Perceptron] {
        &self.outputs
    }

    pub fn hidden_units_mut(&mut self) -> &mut [Perceptron] {
        &mut self.hidden
    }

    pub fn output_units_mut(&mut self) -> &mut [Perceptron] {
        &mut self.outputs
    }
}

impl fmt::Display for NeuralNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inputs:\n")?;
        write_units(f, &self.inputs, |i| format!("Input {i}"))?;
        writeln!(f, "------")?;

        writeln!(f, "Hidden:\n")?;
        write_units(f, &self.hidden, |i| format!("Hidden {i}"))?;
        writeln!(f, "------")?;

        writeln!(f, "Outputs:\n")?;
        write_units(f, &self.outputs, |i| format!("Output {i}"))?;
        write!(f, "-~~~~-")
    }
}

/// Builds `count` randomly initialised perceptrons with the given fan-in.
pub(crate) fn random_units<R: Rng>(count: usize, fan_in: usize, rng: &mut R) -> Result<Vec<Perceptron>> {
    (0..count)
        .map(|_| Perceptron::with_rng(fan_in, WeightSpec::Random, BiasSpec::Random, &mut *rng))
        .collect()
}

/// Writes labelled units separated by blank lines. Labels are 1-based.
pub(crate) fn write_units<L>(f: &mut fmt::Formatter<'_>, units: &[Perceptron], label: L) -> fmt::Result
where
    L: Fn(usize) -> String,
{
    for (i, unit) in units.iter().enumerate() {
        writeln!(f, "{}:", label(i + 1))?;
        writeln!(f, "{unit}")?;
        if i + 1 != units.len() {
            writeln!(f)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KisnnError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fan_ins_follow_layer_sizes() {
        let nn = NeuralNetwork::with_rng(4, 3, 2, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(nn.input_units().len(), 4);
        assert!(nn.input_units().iter().all(|p| p.input_count() == 1));
        assert_eq!(nn.hidden_units().len(), 3);
        assert!(nn.hidden_units().iter().all(|p| p.input_count() == 4));
        assert_eq!(nn.output_units().len(), 2);
        assert!(nn.output_units().iter().all(|p| p.input_count() == 3));
    }

    #[test]
    fn outputs_without_hidden_units_are_rejected() {
        assert_eq!(NeuralNetwork::new(2, 0, 1), Err(KisnnError::ZeroInputCount));
    }

    #[test]
    fn units_can_be_trained_by_the_caller() {
        let mut nn = NeuralNetwork::with_rng(2, 2, 1, &mut StdRng::seed_from_u64(9)).unwrap();
        let before = nn.output_units()[0].clone();
        nn.output_units_mut()[0].adjust_weights(1.0, &[1.0, 1.0], 0.5).unwrap();
        assert_eq!(nn.output_units()[0].bias(), before.bias() + 0.5);

        let hidden = nn.hidden_units()[1].clone();
        nn.hidden_units_mut()[1].learn(&[0.0, 0.0], hidden.output(&[0.0, 0.0]).unwrap(), 0.5).unwrap();
        assert_eq!(nn.hidden_units()[1], hidden);
        nn.hidden_units_mut()[1].adjust_weights(-1.0, &[2.0, 0.0], 0.25).unwrap();
        assert_eq!(nn.hidden_units()[1].weights()[0], hidden.weights()[0] - 0.5);
        assert_eq!(nn.hidden_units().len(), 2);
    }

    #[test]
    fn display_has_labelled_sections() {
        let nn = NeuralNetwork::with_rng(2, 1, 1, &mut StdRng::seed_from_u64(2)).unwrap();
        let text = nn.to_string();

        assert!(text.starts_with("Inputs:\n\nInput 1:\nNumber of inputs: 1\n"));
        assert!(text.contains("\n\nInput 2:\n"));
        assert!(text.contains("------\nHidden:\n\nHidden 1:\nNumber of inputs: 2\n"));
        assert!(text.contains("------\nOutputs:\n\nOutput 1:\nNumber of inputs: 1\n"));
        assert!(text.ends_with("\n-~~~~-"));
    }
}
