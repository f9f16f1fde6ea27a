/// Mock implementations for testing
mod mock_license_classifier;
mod mock_license_finder;
mod mock_module_resolver;
mod mock_progress_reporter;

pub use mock_license_classifier::MockLicenseClassifier;
pub use mock_license_finder::MockLicenseFinder;
pub use mock_module_resolver::MockModuleResolver;
pub use mock_progress_reporter::MockProgressReporter;
