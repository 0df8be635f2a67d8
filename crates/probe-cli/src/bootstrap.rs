use anyhow::Context;
use probe_config::ProbeConfig;

use crate::cli::Cli;

/// Load `.env`, then layer files, environment, and command-line flags.
pub fn load_config(cli: &Cli) -> anyhow::Result<ProbeConfig> {
    load_dotenv()?;
    let config = ProbeConfig::load_with_overrides(&cli.target_overrides())
        .context("failed to load contract-probe configuration")?;
    tracing::debug!(
        base_url = %config.target.base_url,
        api_prefix = %config.target.api_prefix,
        timeout_secs = config.target.timeout_secs,
        insecure = config.target.insecure,
        "configuration loaded"
    );
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load .env file"),
    }
}
