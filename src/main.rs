use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use stoplight::config::SimulationConfig;
use stoplight::display::{ConsoleDisplay, JsonLinesDisplay, LogDisplay};
use stoplight::driver::{Clock, InstantClock, RunReport, Runner, Shutdown, TokioClock};
use stoplight::effects::SignalEnv;
use stoplight::CycleLimit;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stoplight")]
#[command(about = "Two-axis intersection traffic light simulator", long_about = None)]
struct Cli {
    /// JSON settings file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the axis that starts green
    #[arg(long)]
    axis_a: Option<String>,

    /// Name of the axis that starts red
    #[arg(long)]
    axis_b: Option<String>,

    /// Green hold in seconds
    #[arg(short, long, allow_negative_numbers = true)]
    green: Option<i64>,

    /// Yellow hold in seconds
    #[arg(short, long, allow_negative_numbers = true)]
    yellow: Option<i64>,

    /// Number of cycles to run
    #[arg(short = 'n', long, conflicts_with = "forever")]
    cycles: Option<u64>,

    /// Run until interrupted
    #[arg(long)]
    forever: bool,

    /// Skip real waiting between phases
    #[arg(long)]
    no_wait: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Output::Console)]
    output: Output,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Console,
    Log,
    Json,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<SimulationConfig> {
        let mut settings = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(axis_a) = &self.axis_a {
            settings.axis_a = axis_a.clone();
        }
        if let Some(axis_b) = &self.axis_b {
            settings.axis_b = axis_b.clone();
        }
        if let Some(green) = self.green {
            settings.green_secs = green;
        }
        if let Some(yellow) = self.yellow {
            settings.yellow_secs = yellow;
        }
        if self.forever {
            settings.cycles = None;
        } else if let Some(cycles) = self.cycles {
            settings.cycles = Some(cycles);
        }

        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "stoplight=debug"
    } else {
        "stoplight=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = cli.settings()?;
    let intersection = settings
        .intersection()
        .context("Cannot start the intersection")?;
    let limit = settings.cycle_limit();
    anyhow::ensure!(
        !(cli.no_wait && limit == CycleLimit::Unbounded),
        "--no-wait needs a bounded number of cycles"
    );

    info!(
        axis_a = %settings.axis_a,
        axis_b = %settings.axis_b,
        green_secs = settings.green_secs,
        yellow_secs = settings.yellow_secs,
        ?limit,
        "intersection configured"
    );

    let (shutdown, signal) = Shutdown::new();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, stopping");
            shutdown.trigger();
        }
    });

    let no_wait = cli.no_wait;
    let report = match cli.output {
        Output::Console => {
            ConsoleDisplay.run_started()?;
            let report = simulate(intersection, ConsoleDisplay, no_wait, limit, signal).await?;
            ConsoleDisplay.run_finished(report.cancelled)?;
            report
        }
        Output::Log => simulate(intersection, LogDisplay, no_wait, limit, signal).await?,
        Output::Json => simulate(intersection, JsonLinesDisplay, no_wait, limit, signal).await?,
    };

    info!(
        cycles = report.cycles_completed,
        phases = report.phases_entered,
        cancelled = report.cancelled,
        "simulation finished"
    );

    Ok(())
}

async fn simulate<Env: SignalEnv>(
    intersection: stoplight::Intersection,
    env: Env,
    no_wait: bool,
    limit: CycleLimit,
    signal: stoplight::ShutdownSignal,
) -> anyhow::Result<RunReport> {
    if no_wait {
        run_with(intersection, InstantClock::new(), env, limit, signal).await
    } else {
        run_with(intersection, TokioClock, env, limit, signal).await
    }
}

async fn run_with<C: Clock, Env: SignalEnv>(
    intersection: stoplight::Intersection,
    clock: C,
    env: Env,
    limit: CycleLimit,
    signal: stoplight::ShutdownSignal,
) -> anyhow::Result<RunReport> {
    let mut runner = Runner::new(intersection, clock, env);
    Ok(runner.run(limit, signal).await?)
}
