use crate::compliance::domain::License;
use crate::ports::outbound::{LicenseClassifier, LicenseMatcher, MatchKind};
use crate::shared::error::LicenseError;
use crate::shared::security::{read_bounded, MAX_FILE_SIZE};
use crate::shared::{CancellationToken, Result};
use std::collections::HashSet;
use std::path::Path;

/// MatcherLicenseClassifier adapter: reads a file and asks a LicenseMatcher about it
///
/// Keeps license matches only (copyright fragments are dropped), de-duplicated
/// by name in first-seen order, and resolves each name through the taxonomy.
pub struct MatcherLicenseClassifier<M: LicenseMatcher> {
    matcher: M,
    max_file_size: u64,
}

impl<M: LicenseMatcher> MatcherLicenseClassifier<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Overrides the size above which a file is refused
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

impl<M: LicenseMatcher> LicenseClassifier for MatcherLicenseClassifier<M> {
    fn classify(&self, path: &Path, cancel: &CancellationToken) -> Result<Vec<License>> {
        cancel.check()?;

        let content = read_bounded(path, self.max_file_size).map_err(|e| LicenseError::Read {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut seen = HashSet::new();
        let licenses = self
            .matcher
            .find_matches(&content)
            .into_iter()
            .filter(|m| m.kind == MatchKind::License)
            .filter(|m| seen.insert(m.name.clone()))
            .map(|m| License::new(m.name))
            .collect();

        Ok(licenses)
    }
}
