use crate::compliance::domain::Module;
use crate::compliance::policies::LicenseFileName;
use crate::ports::outbound::LicenseFinder;
use crate::shared::{CancellationToken, Result};
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Directory name whose subtree holds vendored copies of other modules
const VENDOR_DIR: &str = "vendor";

/// RecursiveLicenseFinder adapter walking a module directory with walkdir
///
/// Entries are visited in file-name order so the result is stable for a
/// given directory snapshot. `vendor` directories below the module root are
/// skipped entirely; their modules are reported on their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveLicenseFinder;

impl RecursiveLicenseFinder {
    pub fn new() -> Self {
        Self
    }
}

impl LicenseFinder for RecursiveLicenseFinder {
    fn find(&self, module: &Module, cancel: &CancellationToken) -> Result<Vec<PathBuf>> {
        let Some(dir) = module.dir() else {
            return Ok(Vec::new());
        };

        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_vendor_dir(entry));

        let mut found = Vec::new();
        for entry in walker {
            cancel.check()?;
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(LicenseFileName::matches);
            if matches {
                found.push(entry.into_path());
            }
        }

        Ok(found)
    }
}

fn is_vendor_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VENDOR_DIR
}
