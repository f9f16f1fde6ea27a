use super::{License, Module};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// LicenseFile - a discovered license-bearing file and what it was classified as
///
/// Several files of the same module share one `Module` through the `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFile {
    path: PathBuf,
    rel_path: String,
    module: Arc<Module>,
    licenses: Vec<License>,
}

impl LicenseFile {
    pub fn new(
        path: PathBuf,
        rel_path: impl Into<String>,
        module: Arc<Module>,
        licenses: Vec<License>,
    ) -> Self {
        Self {
            path,
            rel_path: rel_path.into(),
            module,
            licenses,
        }
    }

    /// Absolute path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the module root; empty if it could not be computed
    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    /// File name component, used to tell NOTICE/COPYRIGHT files apart
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// pkg.go.dev page listing the licenses of the owning module
    pub fn source_url(&self) -> String {
        format!(
            "https://pkg.go.dev/{}@{}?tab=licenses",
            self.module.path(),
            self.module.version()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module() -> Arc<Module> {
        Arc::new(Module::new(
            "github.com/foo/bar",
            "v1.2.3",
            Some(PathBuf::from("/mod/bar")),
        ))
    }

    #[test]
    fn test_accessors() {
        let file = LicenseFile::new(
            PathBuf::from("/mod/bar/LICENSE.md"),
            "LICENSE.md",
            module(),
            vec![License::new("MIT")],
        );
        assert_eq!(file.path(), Path::new("/mod/bar/LICENSE.md"));
        assert_eq!(file.rel_path(), "LICENSE.md");
        assert_eq!(file.module().path(), "github.com/foo/bar");
        assert_eq!(file.licenses().len(), 1);
        assert_eq!(file.file_name(), "LICENSE.md");
    }

    #[test]
    fn test_source_url() {
        let file = LicenseFile::new(PathBuf::from("/mod/bar/LICENSE"), "LICENSE", module(), vec![]);
        assert_eq!(
            file.source_url(),
            "https://pkg.go.dev/github.com/foo/bar@v1.2.3?tab=licenses"
        );
    }

    #[test]
    fn test_files_share_module() {
        let shared = module();
        let a = LicenseFile::new(PathBuf::from("/mod/bar/LICENSE"), "LICENSE", shared.clone(), vec![]);
        let b = LicenseFile::new(PathBuf::from("/mod/bar/NOTICE"), "NOTICE", shared.clone(), vec![]);
        assert_eq!(a.module(), b.module());
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
