use clap::Parser;

pub mod global;

pub use global::OutputFormat;

use probe_config::TargetOverrides;

/// Top-level CLI parser for the `probe` binary.
#[derive(Debug, Parser)]
#[command(
    name = "probe",
    version,
    about = "contract-probe - end-to-end HTTP contract verification"
)]
pub struct Cli {
    /// Base URL of the API under test [default: http://localhost:8080]
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Skip TLS certificate verification (only meaningful for https://)
    #[arg(long)]
    pub insecure: bool,

    /// Timeout applied to every request, in seconds [default: 30]
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Output format: text, json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (summary only, error-level logging)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags that override the `target` configuration section.
    #[must_use]
    pub fn target_overrides(&self) -> TargetOverrides {
        TargetOverrides {
            base_url: self.base_url.clone(),
            insecure: self.insecure.then_some(true),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Whether per-check progress lines are printed while the run is in flight.
    #[must_use]
    pub fn shows_progress(&self) -> bool {
        self.format == OutputFormat::Text && !self.quiet
    }
}
