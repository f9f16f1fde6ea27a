use crate::compliance::domain::License;
use crate::shared::{CancellationToken, Result};
use std::path::Path;

/// LicenseClassifier port: tells which licenses a file contains
pub trait LicenseClassifier: Send + Sync {
    /// Classifies the file at `path`
    ///
    /// # Returns
    /// Distinct licenses in first-seen order. An empty list means no license
    /// text was recognized, which is not an error.
    ///
    /// # Errors
    /// Returns `LicenseError::Read` if the file cannot be read.
    fn classify(&self, path: &Path, cancel: &CancellationToken) -> Result<Vec<License>>;
}
