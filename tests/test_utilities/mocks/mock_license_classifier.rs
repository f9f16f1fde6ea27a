use license_please::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock LicenseClassifier returning canned license names per path
///
/// Paths without an entry classify as `default_licenses`.
#[derive(Default)]
pub struct MockLicenseClassifier {
    default_licenses: Vec<String>,
    by_path: HashMap<PathBuf, Vec<String>>,
    unreadable: HashSet<PathBuf>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockLicenseClassifier {
    pub fn new(default_licenses: &[&str]) -> Self {
        Self {
            default_licenses: default_licenses.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_licenses(mut self, path: impl Into<PathBuf>, names: &[&str]) -> Self {
        self.by_path
            .insert(path.into(), names.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LicenseClassifier for MockLicenseClassifier {
    fn classify(&self, path: &Path, cancel: &CancellationToken) -> Result<Vec<License>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        cancel.check()?;
        if self.unreadable.contains(path) {
            return Err(LicenseError::Read {
                path: path.to_path_buf(),
                details: "Permission denied".to_string(),
            }
            .into());
        }
        let names = self.by_path.get(path).unwrap_or(&self.default_licenses);
        Ok(names.iter().map(|name| License::new(name.as_str())).collect())
    }
}
