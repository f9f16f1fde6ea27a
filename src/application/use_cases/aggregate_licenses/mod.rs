use crate::compliance::domain::{LicenseFile, Module};
use crate::ports::outbound::{LicenseClassifier, LicenseFinder, ModuleResolver, ProgressReporter};
use crate::shared::error::LicenseError;
use crate::shared::{CancellationToken, Result};
use anyhow::Context;
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Aggregator - the resolve, find, classify pipeline
///
/// Produces one `LicenseFile` per discovered file, in resolver order and
/// then finder order within a module. Nothing is de-duplicated: a license
/// file reachable from two modules is reported twice. Every failure aborts
/// the run; a partial report is never returned.
///
/// # Type Parameters
/// * `MR` - ModuleResolver implementation
/// * `LF` - LicenseFinder implementation
/// * `LC` - LicenseClassifier implementation
/// * `PR` - ProgressReporter implementation
pub struct Aggregator<MR, LF, LC, PR> {
    resolver: MR,
    finder: LF,
    classifier: LC,
    progress_reporter: PR,
    parallel: bool,
}

impl<MR, LF, LC, PR> Aggregator<MR, LF, LC, PR>
where
    MR: ModuleResolver,
    LF: LicenseFinder,
    LC: LicenseClassifier,
    PR: ProgressReporter,
{
    /// Creates a sequential aggregator with injected dependencies
    pub fn new(resolver: MR, finder: LF, classifier: LC, progress_reporter: PR) -> Self {
        Self {
            resolver,
            finder,
            classifier,
            progress_reporter,
            parallel: false,
        }
    }

    /// Processes modules on the rayon pool when `parallel` is true
    ///
    /// Output order and the reported error are the same as sequentially:
    /// the first failing module in resolver order wins.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Runs the whole pipeline for `project_dir`
    pub fn aggregate(&self, project_dir: &Path, cancel: &CancellationToken) -> Result<Vec<LicenseFile>> {
        let modules = self.resolve_modules(project_dir, cancel)?;
        self.collect(modules, cancel)
    }

    /// Stage one: the module list, failing with `LicenseError::Resolution` context
    pub fn resolve_modules(&self, project_dir: &Path, cancel: &CancellationToken) -> Result<Vec<Module>> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving Go modules in: {}",
            project_dir.display()
        ));

        let modules = self
            .resolver
            .resolve(project_dir, cancel)
            .with_context(|| LicenseError::Resolution {
                project_dir: project_dir.to_path_buf(),
            })?;

        self.progress_reporter
            .report(&format!("✅ Resolved {} module(s)", modules.len()));
        Ok(modules)
    }

    /// Stages two and three for an already resolved module list
    pub fn collect(&self, modules: Vec<Module>, cancel: &CancellationToken) -> Result<Vec<LicenseFile>> {
        let modules: Vec<Arc<Module>> = modules.into_iter().map(Arc::new).collect();
        let total = modules.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        self.progress_reporter
            .report(&format!("📜 Scanning {} module(s) for license files...", total));

        let per_module = if self.parallel {
            let finder = &self.finder;
            let classifier = &self.classifier;
            let results: Vec<Result<Vec<LicenseFile>>> = modules
                .par_iter()
                .map(|module| license_files_of(finder, classifier, module, cancel))
                .collect();
            self.progress_reporter.report_progress(total, total, None);
            results
        } else {
            modules
                .iter()
                .enumerate()
                .map(|(i, module)| {
                    let result = license_files_of(&self.finder, &self.classifier, module, cancel);
                    self.progress_reporter
                        .report_progress(i + 1, total, Some(module.path()));
                    result
                })
                // stop at the first failure instead of scanning the remaining modules
                .scan(false, |failed, result| {
                    if *failed {
                        return None;
                    }
                    *failed = result.is_err();
                    Some(result)
                })
                .collect()
        };

        let mut license_files = Vec::new();
        for result in per_module {
            license_files.extend(result?);
        }

        self.progress_reporter.report(&format!(
            "✅ Found {} license file(s)",
            license_files.len()
        ));
        Ok(license_files)
    }
}

/// Finds and classifies the license files of one module
fn license_files_of<LF, LC>(
    finder: &LF,
    classifier: &LC,
    module: &Arc<Module>,
    cancel: &CancellationToken,
) -> Result<Vec<LicenseFile>>
where
    LF: LicenseFinder,
    LC: LicenseClassifier,
{
    let paths = finder
        .find(module, cancel)
        .with_context(|| LicenseError::Walk {
            module: module.path().to_string(),
        })?;

    paths
        .into_iter()
        .map(|path| {
            let licenses = classifier
                .classify(&path, cancel)
                .with_context(|| LicenseError::Classification { path: path.clone() })?;
            let rel_path = relative_path(module.dir(), &path);
            Ok(LicenseFile::new(path, rel_path, Arc::clone(module), licenses))
        })
        .collect()
}

/// Path relative to the module root with `/` separators; empty if `path` is outside it
fn relative_path(module_dir: Option<&Path>, path: &Path) -> String {
    module_dir
        .and_then(|dir| path.strip_prefix(dir).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests;
