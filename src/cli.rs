use clap::{Parser, Subcommand};
use license_please::application::dto::OutputFormat;
use std::path::PathBuf;

/// Third-party license compliance reports for Go modules
#[derive(Parser, Debug)]
#[command(name = "license-please")]
#[command(version)]
#[command(
    about = "Collect, classify and gate the licenses of a Go project's dependencies",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the third-party license report and enforce the allow-list
    Report(ReportArgs),
    /// List the allowed licenses and the files each one requires you to ship
    Licenses,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Go project directory containing go.mod
    #[arg(default_value = ".")]
    pub project_dir: PathBuf,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude modules matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "github.com/acme/*" -e "golang.org/x/tools"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Config file path (default: license-please.config.yml in the project directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Abort the run after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Scan modules in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
