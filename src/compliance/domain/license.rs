use super::{LicenseType, Taxonomy};

/// License - one license recognized in a license file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    name: String,
    license_type: LicenseType,
}

impl License {
    /// Creates a license from a matched name, resolving it through the global taxonomy
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let license_type = Taxonomy::global().resolve(&name);
        Self { name, license_type }
    }

    /// Matched identifier, possibly empty when nothing was recognized
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license_type(&self) -> &LicenseType {
        &self.license_type
    }
}
