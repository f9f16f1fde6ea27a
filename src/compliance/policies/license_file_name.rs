use regex::Regex;
use std::sync::OnceLock;

/// Base names that carry license or attribution text, with at most one extension.
/// Plural forms such as `licenses.go` deliberately fall outside the pattern.
const LICENSE_FILE_PATTERN: &str = r"(?i)^((UN)?LICEN[SC]E|COPYING|NOTICE|COPYRIGHT)(\.[a-z]+)?$";

static LICENSE_FILE_REGEX: OnceLock<Regex> = OnceLock::new();

/// LicenseFileName policy deciding which files are worth classifying
///
/// Names are compared case-insensitively: `LICENSE`, `License.txt`,
/// `UNLICENSE`, `COPYING.txt` and `NOTICE` all qualify.
pub struct LicenseFileName;

impl LicenseFileName {
    /// Returns true when `file_name` looks like a license-bearing file
    pub fn matches(file_name: &str) -> bool {
        regex().is_match(file_name)
    }

    /// Returns true for attribution files (NOTICE/COPYRIGHT) as opposed to licenses
    ///
    /// Looks at the stem only, so `NOTICE.md` and `copyright.txt` qualify.
    pub fn is_notice_like(file_name: &str) -> bool {
        let stem = file_name.split('.').next().unwrap_or_default().to_uppercase();
        stem.contains("NOTICE") || stem.contains("COPYRIGHT")
    }
}

fn regex() -> &'static Regex {
    LICENSE_FILE_REGEX.get_or_init(|| {
        Regex::new(LICENSE_FILE_PATTERN).expect("license file name pattern is a valid regex")
    })
}
