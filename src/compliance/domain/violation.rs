use std::fmt;

/// Violation - one license found on a dependency that the policy does not allow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub module: String,
    pub version: String,
    pub license: String,
    pub rel_path: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}: {} ({})",
            self.module, self.version, self.license, self.rel_path
        )
    }
}
