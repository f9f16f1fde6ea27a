use serde::Serialize;

/// Read model of one compliance report
#[derive(Debug, Clone, Serialize)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    pub summary: SummaryView,
    /// One entry per license file, sorted by module path then relative path
    pub entries: Vec<LicenseEntryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339
    pub timestamp: String,
    pub project_dir: String,
}

/// Counts shown at the top of the report
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub modules: usize,
    pub license_files: usize,
    /// Files where no license was recognized; they need manual review
    pub unclassified_files: usize,
}

/// One license file of one module
#[derive(Debug, Clone, Serialize)]
pub struct LicenseEntryView {
    pub module: String,
    pub version: String,
    /// Identifiers as classified, empty when nothing was recognized
    pub licenses: Vec<String>,
    /// Human readable license column: identifiers, `(NOTICE file)` or `Unknown`
    pub display_name: String,
    pub rel_path: String,
    pub source_url: String,
    /// Files that have to ship with a distribution, relative to the module root
    pub artifacts: Vec<String>,
    pub text: String,
}
