use solsim::{Scenario, ScenarioConfig, Trajectory};
use solsim::{bench_step, energy_drift_curve};

use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name under scenarios/
    #[arg(short, default_value = "circular.yaml")]
    file_name: String,

    /// Stream the recorded trajectories as CSV on stdout
    #[arg(long)]
    dump: bool,

    /// Run the step-cost and energy-drift benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// CSV export of the recorded trajectories: one row per body per step,
/// the form a downstream 2-D line plot consumes
fn dump_csv(trajectories: &[Trajectory], h0: f64) {
    println!("body,step,t,x,y,vx,vy");
    for (i, traj) in trajectories.iter().enumerate() {
        for (step, s) in traj.samples().iter().enumerate() {
            println!(
                "{},{},{:.6},{},{},{},{}",
                i,
                step,
                step as f64 * h0,
                s.x.x,
                s.x.y,
                s.v.x,
                s.v.y
            );
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        energy_drift_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let gm = scenario.parameters.gm;
    let h0 = scenario.parameters.h0;
    let e0: Vec<f64> = scenario
        .system
        .bodies
        .iter()
        .map(|b| b.specific_energy(gm))
        .collect();

    let trajectories = scenario.run()?;

    for (i, (traj, b)) in trajectories.iter().zip(scenario.system.bodies.iter()).enumerate() {
        let drift = ((b.specific_energy(gm) - e0[i]) / e0[i]).abs();
        info!(
            body = i,
            samples = traj.len(),
            x = ?b.x,
            rel_energy_drift = drift,
            "body finished"
        );
    }

    if args.dump {
        dump_csv(&trajectories, h0);
    }

    Ok(())
}
