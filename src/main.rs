// Prints a multilayer topology. The training demos are cargo examples:
//   cargo run --example and
//   cargo run --example topology
use anyhow::Context;
use log::info;

use kisnn::TopologySpec;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let spec = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading topology file {path}"))?;
            TopologySpec::from_json_str(&json)
                .with_context(|| format!("parsing topology file {path}"))?
        }
        None => TopologySpec::default(),
    };
    info!("building topology: {spec:?}");

    let mlp = spec.build()?;
    println!("{mlp}");
    Ok(())
}
