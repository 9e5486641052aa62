use std::fmt;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::error::{KisnnError, Result};
use crate::network::network::{random_units, write_units};
use crate::network::widths::StageWidths;
use crate::perceptron::perceptron::Perceptron;

/// Network with any number of hidden stages.
///
/// Stage 0 takes `input_count` inputs, stage `k` takes one input per unit of
/// stage `k - 1`, and every output unit takes one input per unit of the last
/// stage. The whole topology is built in one go and cannot be reshaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultilayerPerceptron {
    inputs: Vec<Perceptron>,
    hidden: Vec<Vec<Perceptron>>,
    outputs: Vec<Perceptron>,
}

impl MultilayerPerceptron {
    /// ```
    /// use kisnn::MultilayerPerceptron;
    ///
    /// let mlp = MultilayerPerceptron::build(4, 1, 3, [5, 6, 2]).unwrap();
    /// assert_eq!(mlp.stage_widths(), vec![5, 6, 2]);
    /// assert_eq!(mlp.output_units()[0].input_count(), 2);
    /// ```
    pub fn build(
        input_count: usize,
        output_count: usize,
        stage_count: usize,
        stage_widths: impl Into<StageWidths>,
    ) -> Result<MultilayerPerceptron> {
        MultilayerPerceptron::build_with_rng(
            input_count,
            output_count,
            stage_count,
            stage_widths,
            &mut rand::thread_rng(),
        )
    }

    pub fn build_with_rng<R: Rng>(
        input_count: usize,
        output_count: usize,
        stage_count: usize,
        stage_widths: impl Into<StageWidths>,
        rng: &mut R,
    ) -> Result<MultilayerPerceptron> {
        let widths = stage_widths.into().normalize(stage_count)?;
        let last_width = *widths.last().ok_or(KisnnError::NoHiddenStages)?;

        let inputs = random_units(input_count, 1, rng)?;

        let mut hidden = Vec::with_capacity(stage_count);
        let mut fan_in = input_count;
        for &width in &widths {
            hidden.push(random_units(width, fan_in, rng)?);
            fan_in = width;
        }

        let outputs = random_units(output_count, last_width, rng)?;

        debug!(
            "built multilayer perceptron: inputs={input_count} hidden={widths:?} outputs={output_count}"
        );

        Ok(MultilayerPerceptron { inputs, hidden, outputs })
    }

    pub fn input_units(&self) -> &[Perceptron] {
        &self.inputs
    }

    pub fn hidden_stages(&self) -> &[Vec<Perceptron>] {
        &self.hidden
    }

    pub fn output_units(&self) -> &[Perceptron] {
        &self.outputs
    }

    pub fn stage_count(&self) -> usize {
        self.hidden.len()
    }

    /// Number of units in each hidden stage.
    pub fn stage_widths(&self) -> Vec<usize> {
        self.hidden.iter().map(Vec::len).collect()
    }

    pub fn hidden_stage_mut(&mut self, stage: usize) -> Option<&mut [Perceptron]> {
        self.hidden.get_mut(stage).map(Vec::as_mut_slice)
    }

    pub fn output_units_mut(&mut self) -> &mut [Perceptron] {
        &mut self.outputs
    }
}

impl fmt::Display for MultilayerPerceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inputs:\n")?;
        write_units(f, &self.inputs, |i| format!("Input {i}"))?;
        writeln!(f, "------")?;

        writeln!(f, "Hidden:\n")?;
        for (k, stage) in self.hidden.iter().enumerate() {
            write_units(f, stage, |j| format!("Hidden[{}][{j}]", k + 1))?;
            if k + 1 != self.hidden.len() {
                writeln!(f, "\nxxxxxx\n")?;
            }
        }
        writeln!(f, "------")?;

        writeln!(f, "Outputs:\n")?;
        write_units(f, &self.outputs, |i| format!("Output {i}"))
    }
}
