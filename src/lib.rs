//! license-please - third-party license compliance for Go modules
//!
//! This library resolves the module graph of a Go project, finds the license
//! files of every dependency, classifies them, and gates the result against an
//! allow-list, following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): license taxonomy, modules, license files and the policy gate
//! - **Application Layer** (`application`): the aggregation pipeline and report use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities, cancellation and error types
//!
//! # Example
//!
//! ```no_run
//! use license_please::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let aggregator = Aggregator::new(
//!     GoModResolver::new(),
//!     RecursiveLicenseFinder::new(),
//!     MatcherLicenseClassifier::new(PhraseLicenseMatcher::new()?),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let use_case = GenerateReportUseCase::new(aggregator);
//! let request = ReportRequest::new(PathBuf::from("."));
//! let response = use_case.execute(request, &CancellationToken::new())?;
//!
//! // Format output
//! let output = MarkdownFormatter::new().format(&response.read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::classifier::{MatcherLicenseClassifier, PhraseLicenseMatcher};
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, RecursiveLicenseFinder, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::go::GoModResolver;
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::read_models::ReportReadModel;
    pub use crate::application::use_cases::{Aggregator, GenerateReportUseCase};
    pub use crate::compliance::domain::{
        License, LicenseFile, LicenseType, Module, Taxonomy, Violation,
    };
    pub use crate::compliance::services::{ModuleFilter, PolicyGate};
    pub use crate::ports::outbound::{
        LicenseClassifier, LicenseFinder, LicenseMatch, LicenseMatcher, MatchKind,
        ModuleResolver, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, LicenseError};
    pub use crate::shared::{CancellationToken, Result};
}
