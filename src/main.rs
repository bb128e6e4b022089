use mgsim::{ScenarioConfig, Scenario, RunMode, RecordingSurface};
use mgsim::bench_update_physics;

use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name inside `<crate>/scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Scenario file at an arbitrary path, overrides `-f`
    #[arg(long)]
    path: Option<PathBuf>,

    /// Run the update_physics timing harness and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = match &args.path {
        Some(p) => p.clone(),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name),
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario) {
    let ticks = scenario.engine.ticks;
    let frame_ms = scenario.engine.frame_ms;
    let log_every = scenario.engine.log_every;

    info!(ticks, particles = scenario.simulation.len(), "headless run starting");

    let mut surface = RecordingSurface::new();
    let mut merges = 0;

    for k in 0..ticks {
        surface.clear();
        merges += scenario.frame(k as f64 * frame_ms, &mut surface).merges;

        if log_every > 0 && (k + 1) % log_every == 0 {
            let sim = &scenario.simulation;
            let p = sim.total_momentum();
            info!(
                tick = k + 1,
                particles = sim.len(),
                visible = surface.sprites.len(),
                total_mass = sim.total_mass(),
                px = p.x,
                py = p.y,
                "diagnostics"
            );
        }
    }

    info!(
        ticks,
        merges,
        particles = scenario.simulation.len(),
        total_mass = scenario.simulation.total_mass(),
        "headless run finished"
    );
}

#[cfg(feature = "viewer")]
fn run_viewer(scenario: Scenario) -> Result<()> {
    mgsim::run_2d(scenario);
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn run_viewer(_scenario: Scenario) -> Result<()> {
    anyhow::bail!("viewer mode needs the `viewer` feature (cargo run --features viewer)")
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if args.bench {
        bench_update_physics();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    match scenario.engine.mode {
        RunMode::Headless => run_headless(scenario),
        RunMode::Viewer => run_viewer(scenario)?,
    }

    Ok(())
}
