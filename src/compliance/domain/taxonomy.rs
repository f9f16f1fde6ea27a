use super::LicenseType;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Licenses the tool knows how to comply with
const KNOWN_LICENSES: [LicenseType; 9] = [
    LicenseType::Mit,
    LicenseType::Apache2,
    LicenseType::Bsd2Clause,
    LicenseType::Bsd3Clause,
    LicenseType::Isc,
    LicenseType::Mpl2,
    LicenseType::Unlicense,
    LicenseType::CcBySa4,
    LicenseType::Python2,
];

static TAXONOMY: OnceLock<Taxonomy> = OnceLock::new();

/// Taxonomy - process-wide mapping from canonical identifier to LicenseType
///
/// Built once on first use and read-only afterwards. The allow-list used by
/// the policy gate is exactly the set of known identifiers.
#[derive(Debug)]
pub struct Taxonomy {
    known: BTreeMap<String, LicenseType>,
    allowed: BTreeSet<String>,
}

impl Taxonomy {
    /// Returns the shared taxonomy instance
    pub fn global() -> &'static Taxonomy {
        TAXONOMY.get_or_init(Taxonomy::build)
    }

    fn build() -> Self {
        let known: BTreeMap<String, LicenseType> = KNOWN_LICENSES
            .iter()
            .map(|license_type| (license_type.identifier().to_string(), license_type.clone()))
            .collect();
        let allowed = known.keys().cloned().collect();
        Self { known, allowed }
    }

    /// Maps an identifier to its LicenseType
    ///
    /// Never fails: identifiers outside the taxonomy (including the empty
    /// string) come back as `LicenseType::Unknown` carrying the input verbatim.
    pub fn resolve(&self, identifier: &str) -> LicenseType {
        self.known
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| LicenseType::Unknown(identifier.to_string()))
    }

    /// Identifiers accepted by the default policy
    pub fn allowed_identifiers(&self) -> &BTreeSet<String> {
        &self.allowed
    }

    /// Every known license type, ordered by identifier
    pub fn known_types(&self) -> impl Iterator<Item = &LicenseType> {
        self.known.values()
    }

    pub fn is_known(&self, identifier: &str) -> bool {
        self.known.contains_key(identifier)
    }
}
