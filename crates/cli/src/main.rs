use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use flowdeck_engine::schedule::StepTiming;
use flowdeck_tui::RunOptions;

/// Terminal demo dashboard: a simulated ERP integration workflow and a
/// static inventory browser.
#[derive(Debug, Parser)]
#[command(name = "flowdeck", version, about)]
struct Cli {
    /// Probability that a simulated step fails, 0.0 to 1.0
    #[arg(long, default_value_t = 0.1)]
    fail_rate: f64,

    /// Seed the outcome source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated call latency in milliseconds
    #[arg(long, default_value_t = 2000)]
    latency_ms: u64,

    /// Delay between a successful step and the stage advance, milliseconds
    #[arg(long, default_value_t = 900)]
    settle_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    if !(0.0..=1.0).contains(&cli.fail_rate) {
        anyhow::bail!("--fail-rate must be within 0.0..=1.0");
    }

    let options = RunOptions {
        fail_rate: cli.fail_rate,
        seed: cli.seed,
        timing: StepTiming {
            latency: Duration::from_millis(cli.latency_ms),
            settle: Duration::from_millis(cli.settle_ms),
        },
    };
    tracing::debug!(?options, "starting dashboard");
    flowdeck_tui::run(options).await
}

fn init_tracing() {
    // Quiet by default: the alternate screen owns stdout, so logs go to
    // stderr and only when RUST_LOG asks for them.
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
