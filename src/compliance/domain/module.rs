use std::path::{Path, PathBuf};

/// Module value object: one resolved dependency of the project under analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    path: String,
    version: String,
    dir: Option<PathBuf>,
}

impl Module {
    /// Creates a module; an empty `dir` means the source is not available locally
    pub fn new(path: impl Into<String>, version: impl Into<String>, dir: Option<PathBuf>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            dir: dir.filter(|d| !d.as_os_str().is_empty()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// On-disk location of the module source, if it was materialized
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.path, self.version)
    }
}
