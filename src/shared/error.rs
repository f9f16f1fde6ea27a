use crate::compliance::domain::Violation;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell "some dependency carries a disallowed
/// license" apart from "the licenses could not be determined at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report generated, every license is allowed
    Success = 0,
    /// At least one dependency carries a license outside the allow-list
    PolicyViolation = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (resolution, filesystem walk, unreadable license file, I/O, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that aborted the run
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<LicenseError>() {
            Some(LicenseError::PolicyViolation { .. }) => ExitCode::PolicyViolation,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PolicyViolation => write!(f, "Policy Violation (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license aggregation and policy enforcement.
///
/// The pipeline stages attach `Resolution`, `Walk` and `Classification` as
/// anyhow context, so the underlying cause stays reachable through the chain.
#[derive(Debug, Error)]
pub enum LicenseError {
    #[error("Failed to resolve dependency modules for project: {project_dir}\n\n💡 Hint: Please verify that `go mod download` succeeds in this directory")]
    Resolution { project_dir: PathBuf },

    #[error("Failed to walk license files for module {module}")]
    Walk { module: String },

    #[error("Failed to classify license file: {path}")]
    Classification { path: PathBuf },

    #[error("Failed to read license file: {path}\nDetails: {details}")]
    Read { path: PathBuf, details: String },

    #[error("Operation cancelled before completion")]
    Cancelled,

    #[error("{}", describe_violations(.violations))]
    PolicyViolation { violations: Vec<Violation> },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },
}

impl LicenseError {
    /// Returns true when the root cause of `error` is a cancellation,
    /// regardless of the context attached on the way up.
    pub fn is_cancellation(error: &anyhow::Error) -> bool {
        error
            .chain()
            .any(|cause| matches!(cause.downcast_ref::<LicenseError>(), Some(LicenseError::Cancelled)))
    }
}

fn describe_violations(violations: &[Violation]) -> String {
    let noun = if violations.len() == 1 {
        "dependency"
    } else {
        "dependencies"
    };
    let lines = violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n  ");
    format!(
        "Found {} {} with disallowed licenses:\n  {}",
        violations.len(),
        noun,
        lines
    )
}
