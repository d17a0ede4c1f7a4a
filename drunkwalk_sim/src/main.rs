//! Drunkwalk experiment CLI
//!
//! Runs seeded random-walk experiments and prints their summaries.

use clap::Parser;
use drunkwalk_core::StepPolicy;
use drunkwalk_sim::{ExperimentId, ExperimentReport, ExperimentRunner, SimError};
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Drunkwalk random-walk experiments
#[derive(Parser, Debug)]
#[command(name = "drunkwalk-sim")]
#[command(about = "Simulate biased random walks and summarize distances", long_about = None)]
struct Args {
    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Experiment to run (drunk_test, mean_distance, sqrt_comparison, scatter, all)
    #[arg(short, long, default_value = "all")]
    experiment: String,

    /// Walker kinds, comma separated (usual, cold, e_style, photo, d_style, all)
    #[arg(short, long, value_delimiter = ',')]
    policy: Vec<String>,

    /// Trials per data point (default depends on the experiment)
    #[arg(short, long)]
    trials: Option<usize>,

    /// Step counts, comma separated
    #[arg(long, value_delimiter = ',')]
    steps: Option<Vec<usize>>,

    /// Walk length for the scatter experiment
    #[arg(long, default_value = "100")]
    scatter_steps: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output on stdout
    #[arg(long)]
    json: bool,
}

fn parse_experiments(name: &str) -> Result<Vec<ExperimentId>, SimError> {
    if name.trim().eq_ignore_ascii_case("all") {
        Ok(ExperimentId::all())
    } else {
        Ok(vec![name.parse()?])
    }
}

fn parse_policies(names: &[String]) -> Result<Option<Vec<StepPolicy>>, SimError> {
    if names.is_empty() {
        return Ok(None);
    }
    if names.iter().any(|n| n.trim().eq_ignore_ascii_case("all")) {
        return Ok(Some(StepPolicy::all()));
    }
    let policies = names
        .iter()
        .map(|n| n.trim().parse::<StepPolicy>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(policies))
}

fn run(args: &Args) -> Result<Vec<ExperimentReport>, SimError> {
    let experiments = parse_experiments(&args.experiment)?;

    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    } else {
        args.seed
    };

    let mut runner = ExperimentRunner::new(seed).with_scatter_steps(args.scatter_steps);
    if let Some(trials) = args.trials {
        runner = runner.with_trials(trials);
    }
    if let Some(steps) = &args.steps {
        runner = runner.with_step_counts(steps.clone());
    }
    if let Some(policies) = parse_policies(&args.policy)? {
        runner = runner.with_policies(policies);
    }
    debug!("Runner: {:?}", runner);

    experiments.into_iter().map(|e| runner.run(e)).collect()
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    if !args.json {
        info!("Drunkwalk simulator v{}", env!("CARGO_PKG_VERSION"));
    }

    let reports = match run(&args) {
        Ok(reports) => reports,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize reports: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for report in &reports {
        info!("");
        info!("{} (seed={})", report.experiment, report.seed);
        for line in report.summary_lines() {
            info!("{}", line);
        }
    }
}
