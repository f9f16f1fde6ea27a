/// Kind of text a matcher recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// A license text or license identifier
    License,
    /// A copyright statement
    Copyright,
}

/// One candidate match returned by a LicenseMatcher
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseMatch {
    pub name: String,
    pub kind: MatchKind,
    /// 0.0 to 1.0
    pub confidence: f32,
}

impl LicenseMatch {
    pub fn new(name: impl Into<String>, kind: MatchKind, confidence: f32) -> Self {
        Self {
            name: name.into(),
            kind,
            confidence,
        }
    }
}

/// LicenseMatcher port: the license text recognition engine
///
/// The engine is opaque to the rest of the crate; only the name and kind
/// of each match are used.
pub trait LicenseMatcher: Send + Sync {
    /// Returns every match found in `content`, possibly with repeated names
    fn find_matches(&self, content: &[u8]) -> Vec<LicenseMatch>;
}
