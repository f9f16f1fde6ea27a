use crate::application::read_models::ReportReadModel;
use crate::compliance::domain::LicenseFile;

/// ReportResponse - output of a successful report generation
///
/// Only produced when the policy gate passed.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Aggregated files, sorted by module path then relative path
    pub license_files: Vec<LicenseFile>,
    /// Presentation model handed to the formatter
    pub read_model: ReportReadModel,
    /// Number of resolved modules left out by exclude patterns
    pub excluded_modules: usize,
}

impl ReportResponse {
    pub fn new(
        license_files: Vec<LicenseFile>,
        read_model: ReportReadModel,
        excluded_modules: usize,
    ) -> Self {
        Self {
            license_files,
            read_model,
            excluded_modules,
        }
    }
}
