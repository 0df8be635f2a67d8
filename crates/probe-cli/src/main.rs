use anyhow::Context;
use clap::Parser;
use probe_client::ApiClient;
use probe_harness::Harness;

mod bootstrap;
mod cli;
mod console;
mod output;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("probe error: {error:#}");
            std::process::exit(1);
        }
    }
}

/// Returns whether every executed check passed.
async fn run() -> anyhow::Result<bool> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let client = ApiClient::new(&config.target).context("failed to build HTTP client")?;

    let mut console = console::ConsoleObserver::new(cli.shows_progress());
    console.banner(client.base_url());

    let report = Harness::new(&client, &config, &mut console)
        .run_sequence()
        .await;
    output::output(&report, cli.format)?;
    Ok(report.success())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PROBE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
