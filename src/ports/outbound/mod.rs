/// Outbound ports (driven ports) - infrastructure interfaces
///
/// These are the seams of the aggregation pipeline: each stage is a narrow
/// trait so tests can substitute deterministic doubles for the go toolchain,
/// the filesystem and the license matcher.
pub mod license_classifier;
pub mod license_finder;
pub mod license_matcher;
pub mod module_resolver;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use license_classifier::LicenseClassifier;
pub use license_finder::LicenseFinder;
pub use license_matcher::{LicenseMatch, LicenseMatcher, MatchKind};
pub use module_resolver::ModuleResolver;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
