use clap::ValueEnum;

/// How the run report is printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Live progress lines and a human-readable summary.
    #[default]
    Text,
    /// The whole report as one JSON document, no progress lines.
    Json,
}
