mod cli;

use cli::{Args, Command, ReportArgs};
use license_please::adapters::outbound::classifier::{MatcherLicenseClassifier, PhraseLicenseMatcher};
use license_please::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use license_please::adapters::outbound::filesystem::RecursiveLicenseFinder;
use license_please::adapters::outbound::go::GoModResolver;
use license_please::application::dto::{OutputFormat, ReportRequest};
use license_please::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use license_please::application::use_cases::{Aggregator, GenerateReportUseCase};
use license_please::compliance::domain::Taxonomy;
use license_please::config::{discover_config, load_config_from_path, ConfigFile};
use license_please::ports::outbound::ProgressReporter;
use license_please::shared::error::LicenseError;
use license_please::shared::{CancellationToken, ExitCode, Result};
use owo_colors::OwoColorize;
use std::collections::BTreeSet;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let result = match args.command {
        Command::Report(report_args) => run_report(report_args),
        Command::Licenses => run_licenses(),
    };

    if let Err(e) = result {
        let exit_code = ExitCode::for_error(&e);
        print_error(&e, exit_code);
        process::exit(exit_code.as_i32());
    }
}

fn print_error(error: &anyhow::Error, exit_code: ExitCode) {
    let heading = match exit_code {
        ExitCode::PolicyViolation => "❌ License policy violation:",
        _ => "❌ An error occurred:",
    };
    if use_color() {
        eprintln!("\n{}\n", heading.red().bold());
    } else {
        eprintln!("\n{}\n", heading);
    }
    eprintln!("{}", error);

    // Display error chain
    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Effective options of a report run: CLI flags over config file over defaults
#[derive(Debug)]
struct ReportSettings {
    project_dir: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    exclude_patterns: Vec<String>,
    allowed_licenses: Option<BTreeSet<String>>,
    timeout: Option<Duration>,
    parallel: bool,
    quiet: bool,
    warnings: Vec<String>,
}

impl ReportSettings {
    fn merge(args: ReportArgs, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();

        // exclude patterns from both sources apply, config first, without duplicates
        let mut exclude_patterns = config.exclude_modules.clone().unwrap_or_default();
        for pattern in args.exclude {
            if !exclude_patterns.contains(&pattern) {
                exclude_patterns.push(pattern);
            }
        }

        Self {
            project_dir: args.project_dir,
            format: args.format.or(config.format).unwrap_or_default(),
            output: args.output,
            exclude_patterns,
            allowed_licenses: config.allowed_license_set(),
            timeout: args
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs),
            parallel: args.parallel || config.parallel.unwrap_or(false),
            quiet: args.quiet,
            warnings: config.unknown_field_warnings(),
        }
    }

    fn cancellation_token(&self) -> CancellationToken {
        match self.timeout {
            Some(timeout) => CancellationToken::with_timeout(timeout),
            None => CancellationToken::new(),
        }
    }
}

fn run_report(args: ReportArgs) -> Result<()> {
    validate_project_path(&args.project_dir)?;

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&args.project_dir)?,
    };
    let settings = ReportSettings::merge(args, config);

    if settings.quiet {
        execute_report(settings, SilentProgressReporter::new())
    } else {
        execute_report(settings, StderrProgressReporter::new())
    }
}

fn execute_report<PR: ProgressReporter>(settings: ReportSettings, progress_reporter: PR) -> Result<()> {
    for warning in &settings.warnings {
        progress_reporter.report_error(warning);
    }

    // Create adapters (Dependency Injection)
    let classifier = MatcherLicenseClassifier::new(PhraseLicenseMatcher::new()?);
    let aggregator = Aggregator::new(
        GoModResolver::new(),
        RecursiveLicenseFinder::new(),
        classifier,
        progress_reporter,
    )
    .with_parallelism(settings.parallel);
    let use_case = GenerateReportUseCase::new(aggregator);

    let request = ReportRequest::new(settings.project_dir.clone())
        .with_exclude_patterns(settings.exclude_patterns.clone())
        .with_allowed_licenses(settings.allowed_licenses.clone());

    let cancel = settings.cancellation_token();
    let response = use_case.execute(request, &cancel)?;

    if !settings.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatted_output = FormatterFactory::create(settings.format).format(&response.read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Prints every allowed identifier with what a distribution has to carry for it
fn run_licenses() -> Result<()> {
    let taxonomy = Taxonomy::global();
    for identifier in taxonomy.allowed_identifiers() {
        let license_type = taxonomy.resolve(identifier);
        println!("{:<14} {}", identifier, license_type.requirements());
    }
    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| -> anyhow::Error {
        LicenseError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason,
        }
        .into()
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()));
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        ));
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()));
    }

    Ok(())
}
