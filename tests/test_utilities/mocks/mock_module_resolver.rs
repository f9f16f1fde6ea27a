use license_please::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock ModuleResolver for testing
#[derive(Default)]
pub struct MockModuleResolver {
    pub modules: Vec<Module>,
    pub should_fail: bool,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockModuleResolver {
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            modules,
            ..Default::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ModuleResolver for MockModuleResolver {
    fn resolve(&self, _project_dir: &Path, cancel: &CancellationToken) -> Result<Vec<Module>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        cancel.check()?;
        if self.should_fail {
            anyhow::bail!("Mock resolution failure: go.mod is malformed");
        }
        Ok(self.modules.clone())
    }
}
