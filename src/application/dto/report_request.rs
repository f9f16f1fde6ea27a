use std::collections::BTreeSet;
use std::path::PathBuf;

/// ReportRequest - input of the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Go project directory (contains go.mod)
    pub project_dir: PathBuf,
    /// Wildcard patterns of module paths to leave out of the report
    pub exclude_patterns: Vec<String>,
    /// Allow-list for the policy gate; `None` means every taxonomy license
    pub allowed_licenses: Option<BTreeSet<String>>,
}

impl ReportRequest {
    pub fn new(project_dir: PathBuf) -> Self {
        Self {
            project_dir,
            exclude_patterns: Vec::new(),
            allowed_licenses: None,
        }
    }

    pub fn with_exclude_patterns(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }

    pub fn with_allowed_licenses(mut self, allowed_licenses: Option<BTreeSet<String>>) -> Self {
        self.allowed_licenses = allowed_licenses;
        self
    }
}
