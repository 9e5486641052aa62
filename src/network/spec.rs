use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::multilayer::MultilayerPerceptron;
use crate::network::widths::StageWidths;

/// A serializable description of a multilayer topology.
///
/// Fields:
/// - `inputs`  : raw feature count, which is also the fan-in of the first hidden stage
/// - `outputs` : number of output units
/// - `hidden`  : stage widths, either one width for every stage or a list
/// - `stages`  : number of hidden stages; when absent it is the length of a
///               `hidden` list, or 1 for a single width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologySpec {
    pub inputs: usize,
    pub outputs: usize,
    pub hidden: StageWidths,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<usize>,
}

impl TopologySpec {
    pub fn stage_count(&self) -> usize {
        match (&self.stages, &self.hidden) {
            (Some(stages), _) => *stages,
            (None, StageWidths::PerStage(widths)) => widths.len(),
            (None, StageWidths::Uniform(_)) => 1,
        }
    }

    pub fn build(&self) -> Result<MultilayerPerceptron> {
        MultilayerPerceptron::build(self.inputs, self.outputs, self.stage_count(), self.hidden.clone())
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<TopologySpec> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for TopologySpec {
    fn default() -> Self {
        TopologySpec {
            inputs: 4,
            outputs: 1,
            hidden: StageWidths::PerStage(vec![5, 6, 2]),
            stages: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KisnnError;

    #[test]
    fn stage_count_is_inferred() {
        let spec = TopologySpec::from_json_str(r#"{"inputs": 4, "outputs": 1, "hidden": [5, 6, 2]}"#).unwrap();
        assert_eq!(spec.stage_count(), 3);

        let spec = TopologySpec::from_json_str(r#"{"inputs": 3, "outputs": 2, "hidden": 5}"#).unwrap();
        assert_eq!(spec.stage_count(), 1);

        let spec = TopologySpec::from_json_str(r#"{"inputs": 3, "outputs": 2, "hidden": 5, "stages": 4}"#).unwrap();
        assert_eq!(spec.build().unwrap().stage_widths(), vec![5, 5, 5, 5]);
    }

    #[test]
    fn explicit_stage_count_is_checked_against_the_list() {
        let spec = TopologySpec::from_json_str(r#"{"inputs": 4, "outputs": 1, "hidden": [5, 6], "stages": 3}"#).unwrap();
        assert_eq!(
            spec.build().unwrap_err(),
            KisnnError::StageWidthCountMismatch { expected: 3, actual: 2 }
        );
    }

    #[test]
    fn malformed_topology_is_rejected() {
        assert!(TopologySpec::from_json_str(r#"{"inputs": 4, "outputs": 1, "hidden": "wide"}"#).is_err());
        assert!(TopologySpec::from_json_str(r#"{"inputs": -1, "outputs": 1, "hidden": 3}"#).is_err());
        assert!(TopologySpec::from_json_str(r#"{"inputs": 4, "hidden": 3}"#).is_err());
    }

    #[test]
    fn json_round_trip() {
        let spec = TopologySpec::default();
        let back = TopologySpec::from_json_str(&spec.to_json_string().unwrap()).unwrap();
        assert_eq!(back, spec);
    }
}
