use crate::compliance::domain::{LicenseFile, Taxonomy, Violation};
use crate::shared::{LicenseError, Result};
use std::collections::BTreeSet;

/// PolicyGate - compares classified licenses against an allow-list
///
/// A license is a violation only when it has a name that the allow-list does not
/// contain. Unclassified files (empty name) need manual review but never fail the gate.
#[derive(Debug, Clone)]
pub struct PolicyGate {
    allowed: BTreeSet<String>,
}

impl PolicyGate {
    pub fn new(allowed: BTreeSet<String>) -> Self {
        Self { allowed }
    }

    pub fn allowed(&self) -> &BTreeSet<String> {
        &self.allowed
    }

    /// Every disallowed license, in the order of `license_files`
    pub fn violations(&self, license_files: &[LicenseFile]) -> Vec<Violation> {
        license_files
            .iter()
            .flat_map(|file| {
                file.licenses()
                    .iter()
                    .filter(|license| {
                        !license.name().is_empty() && !self.allowed.contains(license.name())
                    })
                    .map(move |license| Violation {
                        module: file.module().path().to_string(),
                        version: file.module().version().to_string(),
                        license: license.name().to_string(),
                        rel_path: file.rel_path().to_string(),
                    })
            })
            .collect()
    }

    /// Fails with `LicenseError::PolicyViolation` listing every violation
    pub fn check(&self, license_files: &[LicenseFile]) -> Result<()> {
        let violations = self.violations(license_files);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(LicenseError::PolicyViolation { violations }.into())
        }
    }
}

impl Default for PolicyGate {
    /// Gate allowing exactly the licenses of the taxonomy
    fn default() -> Self {
        Self::new(Taxonomy::global().allowed_identifiers().clone())
    }
}
