use rand::rngs::StdRng;
use rand::SeedableRng;

use kisnn::{KisnnError, MultilayerPerceptron, NeuralNetwork, Perceptron, TopologySpec};

fn fan_ins(stage: &[Perceptron]) -> Vec<usize> {
    stage.iter().map(Perceptron::input_count).collect()
}

#[test]
fn multilayer_fan_ins() {
    let mut rng = StdRng::seed_from_u64(4);
    let mlp = MultilayerPerceptron::build_with_rng(4, 1, 3, vec![5, 6, 2], &mut rng).unwrap();

    assert_eq!(fan_ins(mlp.input_units()), vec![1; 4]);
    assert_eq!(fan_ins(&mlp.hidden_stages()[0]), vec![4; 5]);
    assert_eq!(fan_ins(&mlp.hidden_stages()[1]), vec![5; 6]);
    assert_eq!(fan_ins(&mlp.hidden_stages()[2]), vec![6; 2]);
    assert_eq!(fan_ins(mlp.output_units()), vec![2]);
}

#[test]
fn every_stage_consumes_the_previous_one() {
    let mlp = MultilayerPerceptron::build(3, 2, 4, [7, 1, 3, 2]).unwrap();

    let mut fan_out = mlp.input_units().len();
    for stage in mlp.hidden_stages() {
        assert!(stage.iter().all(|p| p.input_count() == fan_out));
        fan_out = stage.len();
    }
    assert!(mlp.output_units().iter().all(|p| p.input_count() == fan_out));
}

#[test]
fn short_width_list_is_rejected() {
    let err = MultilayerPerceptron::build(4, 1, 3, vec![5, 6]).unwrap_err();
    assert_eq!(err, KisnnError::StageWidthCountMismatch { expected: 3, actual: 2 });
}

#[test]
fn single_hidden_layer_network() {
    let nn = NeuralNetwork::new(4, 4, 1).unwrap();
    assert_eq!(fan_ins(nn.input_units()), vec![1; 4]);
    assert_eq!(fan_ins(nn.hidden_units()), vec![4; 4]);
    assert_eq!(fan_ins(nn.output_units()), vec![4]);
    assert!(nn.to_string().ends_with("-~~~~-"));
}

#[test]
fn topology_from_json_config() {
    let spec = TopologySpec::from_json_str(r#"{ "inputs": 3, "outputs": 2, "hidden": 5, "stages": 4 }"#).unwrap();
    let mlp = spec.build().unwrap();

    assert_eq!(mlp.stage_widths(), vec![5; 4]);
    assert_eq!(fan_ins(mlp.output_units()), vec![5, 5]);

    let text = mlp.to_string();
    assert_eq!(text.matches("xxxxxx").count(), 3);
    assert!(text.contains("Hidden[4][5]:"));
    assert!(text.contains("Output 2:"));
}
