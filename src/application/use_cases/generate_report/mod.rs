use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::read_models::{ReportMetadataView, ReportReadModelBuilder};
use crate::application::use_cases::Aggregator;
use crate::compliance::domain::{LicenseFile, Module};
use crate::compliance::services::{ModuleFilter, PolicyGate};
use crate::ports::outbound::{LicenseClassifier, LicenseFinder, ModuleResolver, ProgressReporter};
use crate::shared::{CancellationToken, Result};
use std::path::Path;

/// GenerateReportUseCase - license compliance report for one Go project
///
/// Orchestrates the aggregator around the steps that only make sense for a
/// whole report: module exclusion, canonical ordering, the policy gate and
/// the read model. A report is only produced when the gate passes.
///
/// # Type Parameters
/// * `MR` - ModuleResolver implementation
/// * `LF` - LicenseFinder implementation
/// * `LC` - LicenseClassifier implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<MR, LF, LC, PR> {
    aggregator: Aggregator<MR, LF, LC, PR>,
}

impl<MR, LF, LC, PR> GenerateReportUseCase<MR, LF, LC, PR>
where
    MR: ModuleResolver,
    LF: LicenseFinder,
    LC: LicenseClassifier,
    PR: ProgressReporter,
{
    pub fn new(aggregator: Aggregator<MR, LF, LC, PR>) -> Self {
        Self { aggregator }
    }

    /// Executes the report generation use case
    ///
    /// # Errors
    /// Any aggregation failure, invalid exclude patterns, or
    /// `LicenseError::PolicyViolation` when a disallowed license was found.
    pub fn execute(&self, request: ReportRequest, cancel: &CancellationToken) -> Result<ReportResponse> {
        // Step 1: Resolve the module graph
        let modules = self
            .aggregator
            .resolve_modules(&request.project_dir, cancel)?;

        // Step 2: Drop excluded modules before any walk happens
        let (modules, excluded_modules) = self.apply_exclusion_filters(modules, &request)?;

        // Step 3: Find and classify license files
        let mut license_files = self.aggregator.collect(modules, cancel)?;

        // Step 4: Canonical report order
        sort_license_files(&mut license_files);

        // Step 5: Policy gate
        let gate = request
            .allowed_licenses
            .clone()
            .map(PolicyGate::new)
            .unwrap_or_default();
        gate.check(&license_files)?;

        // Step 6: Read model for the formatters
        let metadata = build_metadata(&request.project_dir);
        let read_model = ReportReadModelBuilder::build(&license_files, metadata)?;

        self.progress_reporter().report_completion(&format!(
            "All {} license file(s) use allowed licenses",
            license_files.len()
        ));

        Ok(ReportResponse::new(
            license_files,
            read_model,
            excluded_modules,
        ))
    }

    fn progress_reporter(&self) -> &PR {
        self.aggregator.progress_reporter()
    }

    /// Applies exclude patterns, warning about the ones that matched nothing
    ///
    /// # Errors
    /// Invalid patterns, or a filter that removed every resolved module.
    fn apply_exclusion_filters(
        &self,
        modules: Vec<Module>,
        request: &ReportRequest,
    ) -> Result<(Vec<Module>, usize)> {
        if request.exclude_patterns.is_empty() {
            return Ok((modules, 0));
        }

        let filter = ModuleFilter::new(request.exclude_patterns.clone())?;
        let original_count = modules.len();
        let filtered = filter.filter_modules(modules);

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter().report(&format!(
                "🚫 Excluded {} module(s) based on filters",
                excluded_count
            ));
        }

        if original_count > 0 && filtered.is_empty() {
            anyhow::bail!(
                "All {} module(s) were excluded by the provided filters. \
                 The report would be empty. Please adjust your exclusion patterns.",
                original_count
            );
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter().report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any modules.",
                pattern
            ));
        }

        Ok((filtered, excluded_count))
    }
}

/// Sorts by module path, then relative path; stable, so duplicates keep aggregation order
fn sort_license_files(license_files: &mut [LicenseFile]) {
    license_files.sort_by(|a, b| {
        a.module()
            .path()
            .cmp(b.module().path())
            .then_with(|| a.rel_path().cmp(b.rel_path()))
    });
}

fn build_metadata(project_dir: &Path) -> ReportMetadataView {
    ReportMetadataView {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        project_dir: project_dir.display().to_string(),
    }
}
