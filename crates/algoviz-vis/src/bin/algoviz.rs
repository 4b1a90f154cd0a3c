//! algoviz step log generator
//!
//! Build a scenario and print its input and step log as JSON for a renderer.

use algoviz_vis::{Algorithm, Scenario, ScenarioConfig};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a replayable step log for a sorting or grid search run.
#[derive(Debug, Parser)]
#[command(name = "algoviz", version)]
struct Cli {
    /// Algorithm to run: bubble, insertion or bfs
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Number of values to sort
    #[arg(long)]
    len: Option<usize>,

    /// Seed text for reproducible input
    #[arg(short, long)]
    seed: Option<String>,

    /// Grid side length for bfs
    #[arg(long)]
    grid_size: Option<usize>,

    /// Per-cell wall probability for bfs
    #[arg(long)]
    wall_prob: Option<f64>,

    /// Print counts instead of the full log
    #[arg(long)]
    summary: bool,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn into_config(self) -> ScenarioConfig {
        let mut config = ScenarioConfig::from_env();
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(len) = self.len {
            config.array_len = len;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(size) = self.grid_size {
            config.grid_size = size;
        }
        if let Some(p) = self.wall_prob {
            config.wall_probability = p;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algoviz=info,algoviz_vis=info,algoviz_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let (summary, pretty) = (cli.summary, cli.pretty);
    let scenario = Scenario::build(cli.into_config())?;

    if summary {
        let s = scenario.summary();
        match s.path_len {
            Some(path_len) => println!(
                "{} seed={} size={} steps={} path={}",
                s.algorithm, s.seed, s.input_size, s.steps, path_len
            ),
            None => println!(
                "{} seed={} len={} steps={}",
                s.algorithm, s.seed, s.input_size, s.steps
            ),
        }
    } else {
        println!("{}", scenario.to_json(pretty)?);
    }

    Ok(())
}
