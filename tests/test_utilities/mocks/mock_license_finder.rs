use license_please::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock LicenseFinder returning canned paths per module path
#[derive(Default)]
pub struct MockLicenseFinder {
    files: HashMap<String, Vec<PathBuf>>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockLicenseFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers files by name; they are placed under the module's `dir`
    pub fn with_files(mut self, module: &Module, names: &[&str]) -> Self {
        let dir = module.dir().map(PathBuf::from).unwrap_or_default();
        self.files.insert(
            module.path().to_string(),
            names.iter().map(|name| dir.join(name)).collect(),
        );
        self
    }

    pub fn with_failure(mut self, module_path: &str) -> Self {
        self.failing.insert(module_path.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LicenseFinder for MockLicenseFinder {
    fn find(&self, module: &Module, cancel: &CancellationToken) -> Result<Vec<PathBuf>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        cancel.check()?;
        if self.failing.contains(module.path()) {
            anyhow::bail!("Mock walk failure: permission denied");
        }
        if module.dir().is_none() {
            return Ok(Vec::new());
        }
        Ok(self.files.get(module.path()).cloned().unwrap_or_default())
    }
}
