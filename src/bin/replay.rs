use bevy::log::{error, info};
use std::{
    env,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use skyhop::{logging, resources::SimulationConfig, scenario::Scenario};

const USAGE: &str = "usage: skyhop_replay <scenario.yaml> [config.yaml]";

fn main() -> ExitCode {
    logging::init("warn");

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(scenario_path) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(scenario_path, args.get(1).map(String::as_str)) {
        Ok(frames) => {
            info!("Replayed {} frames from {}", frames, scenario_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Replay failed: {}", e);
            eprintln!("skyhop_replay: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    scenario_path: &str,
    config_path: Option<&str>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let scenario = Scenario::load(scenario_path)?;
    let config = match config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let frames = scenario.run(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for info in &frames {
        serde_json::to_writer(&mut out, info)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(frames.len())
}
