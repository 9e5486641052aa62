use std::sync::mpsc;

use kisnn::{train_until_converged, ActivationKind, IterationStats, Perceptron, TrainConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("Training perceptron to solve logical AND\n");

    let inputs = vec![
        vec![1.0, 1.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let answers = vec![1.0, 0.0, 0.0, 0.0];

    // Try 0.1, 0.01, 0.001 or 5; any ActivationKind works
    let learning_rate = 0.05;
    let activation = ActivationKind::Step;

    let mut perceptron = Perceptron::new(inputs[0].len())?;

    let (tx, rx) = mpsc::channel();
    let config = TrainConfig::new(learning_rate, activation).with_progress(tx);
    let outcome = train_until_converged(&mut perceptron, &inputs, &answers, &config)?;
    drop(config);

    let labels: Vec<String> = inputs.iter().map(|input| format_sample(input)).collect();
    for stats in rx.iter() {
        print_iteration(&stats, &labels);
    }

    println!(
        "{} after {} iterations (squared error {})",
        if outcome.converged { "Converged" } else { "Gave up" },
        outcome.iterations,
        outcome.squared_error
    );
    println!("{perceptron}");
    Ok(())
}

/// `[1, 0]` style label; its width sets the column width of the report.
fn format_sample(sample: &[f64]) -> String {
    let items: Vec<String> = sample.iter().map(|x| x.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn print_iteration(stats: &IterationStats, labels: &[String]) {
    let width = labels.first().map_or(6, String::len);
    let precision = width.saturating_sub(3);
    let cell = |x: f64| format!("{x:width$.precision$}");
    let row = |name: &str, values: &[f64]| {
        let cells: Vec<String> = values.iter().map(|&x| cell(x)).collect();
        println!("{name:<11}{} ", cells.join(" "));
    };

    println!("Iteration {}", stats.iteration);
    println!("Learning Rate: {:.3}\n", stats.learning_rate);
    println!("Number of inputs: {}", stats.weights.len());
    println!("Weights: {:?}", stats.weights);
    println!("Bias: {:?}\n", stats.bias);

    println!("{:<11}{} ", "Inputs:", labels.join(" "));
    row("WSum:", &stats.weighted_sums);
    row("Output:", &stats.outputs);
    row("Expected:", &stats.expected);
    row("Error:", &stats.errors);
    println!();

    println!("{:<11}{}", "Sq Error:", cell(stats.squared_error));
    if let (Some(previous), Some(gain)) = (stats.previous_squared_error, stats.gain) {
        println!("{:<11}{}", "Previous:", cell(previous));
        println!("{:<11}{}", "Gain:", cell(gain));
    }
    println!("------");
}
