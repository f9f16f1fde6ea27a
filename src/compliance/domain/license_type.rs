use crate::shared::Result;
use std::io;
use std::path::Path;

/// NOTICE file names probed next to an Apache-2.0 license, in this order
const APACHE_NOTICE_FILES: [&str; 3] = ["NOTICE", "NOTICE.txt", "NOTICE.md"];

/// Identifier reported for NOTICE/COPYRIGHT attribution files
const NOTICE_FILE_IDENTIFIER: &str = "(NOTICE)";

/// LicenseType - a classified license together with its redistribution requirements
///
/// The set of variants is closed: every license the tool knows how to comply with
/// has its own variant, anything else is carried verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LicenseType {
    /// Copyright notice and license text in all copies
    Mit,
    /// Copyright notice, license text, and the NOTICE file if the module ships one
    Apache2,
    /// Simplified BSD: copyright notice and license text
    Bsd2Clause,
    /// New BSD: copyright notice and license text, no endorsement
    Bsd3Clause,
    /// Functionally equivalent to MIT
    Isc,
    /// File-level copyleft. Dependencies are assumed unmodified, so only the license is bundled
    Mpl2,
    /// Public domain dedication; bundled for attribution even though not required
    Unlicense,
    /// Documentation license; attribution and share-alike for derivatives
    CcBySa4,
    /// Python Software Foundation License 2.0
    Python2,
    /// A license name the taxonomy does not know, kept verbatim
    Unknown(String),
    /// A NOTICE or COPYRIGHT file carrying attribution rather than a license
    NoticeFile,
}

impl LicenseType {
    /// Canonical (SPDX) identifier of this license
    pub fn identifier(&self) -> &str {
        match self {
            LicenseType::Mit => "MIT",
            LicenseType::Apache2 => "Apache-2.0",
            LicenseType::Bsd2Clause => "BSD-2-Clause",
            LicenseType::Bsd3Clause => "BSD-3-Clause",
            LicenseType::Isc => "ISC",
            LicenseType::Mpl2 => "MPL-2.0",
            LicenseType::Unlicense => "Unlicense",
            LicenseType::CcBySa4 => "CC-BY-SA-4.0",
            LicenseType::Python2 => "Python-2.0",
            LicenseType::Unknown(name) => name,
            LicenseType::NoticeFile => NOTICE_FILE_IDENTIFIER,
        }
    }

    /// Human readable summary of what a distribution must carry
    pub fn requirements(&self) -> &'static str {
        match self {
            LicenseType::Mit | LicenseType::Isc | LicenseType::Bsd2Clause => {
                "copyright notice and license text"
            }
            LicenseType::Bsd3Clause => {
                "copyright notice and license text; no endorsement using author names"
            }
            LicenseType::Apache2 => {
                "copyright notice, license text and NOTICE file if present; state changes"
            }
            LicenseType::Mpl2 => "license text; source of modified MPL files",
            LicenseType::Unlicense => "none (license bundled for attribution)",
            LicenseType::CcBySa4 => "attribution; share-alike for derivatives",
            LicenseType::Python2 => "copyright notice and license text",
            LicenseType::Unknown(_) => "unknown; the license file is bundled for review",
            LicenseType::NoticeFile => "attribution notice",
        }
    }

    /// Files that must be bundled with a distribution to comply with this license
    ///
    /// Paths are relative to `module_dir`; `license_rel_path` always comes first.
    /// Only Apache-2.0 touches the filesystem, probing for a NOTICE file; a missing
    /// NOTICE is normal, any other I/O failure during the probe is returned.
    pub fn collect_artifacts(&self, module_dir: &Path, license_rel_path: &str) -> Result<Vec<String>> {
        let mut artifacts = vec![license_rel_path.to_string()];

        if let LicenseType::Apache2 = self {
            if module_dir.as_os_str().is_empty() {
                return Ok(artifacts);
            }
            for candidate in APACHE_NOTICE_FILES {
                if candidate == license_rel_path {
                    continue;
                }
                if notice_exists(&module_dir.join(candidate))? {
                    artifacts.push(candidate.to_string());
                }
            }
        }

        Ok(artifacts)
    }

    /// True for every variant the taxonomy recognizes
    pub fn is_known(&self) -> bool {
        !matches!(self, LicenseType::Unknown(_) | LicenseType::NoticeFile)
    }
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

fn notice_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(anyhow::anyhow!(
            "Failed to probe NOTICE file {}: {}",
            path.display(),
            e
        )),
    }
}
