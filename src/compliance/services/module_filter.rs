use crate::compliance::domain::Module;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns accepted
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ModuleFilter - drops resolved modules whose path matches an exclude pattern
///
/// Patterns are matched against the whole module path. `*` matches any run of
/// characters, including `/`, so `github.com/acme/*` excludes every module of
/// that organisation. Matching is case-sensitive.
#[derive(Debug)]
pub struct ModuleFilter {
    patterns: Vec<ExcludePattern>,
}

impl ModuleFilter {
    /// Validates and compiles the raw patterns
    ///
    /// # Errors
    /// - more than `MAX_EXCLUDE_PATTERNS` patterns
    /// - an empty, overlong or wildcard-only pattern, or one with characters
    ///   that cannot appear in a module path
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Keeps the modules that match no pattern, preserving order
    pub fn filter_modules(&self, modules: Vec<Module>) -> Vec<Module> {
        modules
            .into_iter()
            .filter(|module| !self.matches(module.path()))
            .collect()
    }

    fn matches(&self, module_path: &str) -> bool {
        // every pattern is evaluated so each one records whether it was used
        self.patterns
            .iter()
            .fold(false, |hit, pattern| pattern.matches(module_path) || hit)
    }

    /// Patterns that excluded nothing during previous calls to `filter_modules`
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = PatternMatcher::compile(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, module_path: &str) -> bool {
        let is_match = self.matcher.matches(module_path);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// No wildcard: "github.com/acme/lib"
    Exact(String),
    /// Literal pieces between wildcards; `anchored_start`/`anchored_end` are
    /// false when the pattern begins/ends with `*`
    Glob {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn compile(pattern: &str) -> Self {
        if !pattern.contains('*') {
            return PatternMatcher::Exact(pattern.to_string());
        }
        PatternMatcher::Glob {
            parts: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => candidate == s,
            PatternMatcher::Glob {
                parts,
                anchored_start,
                anchored_end,
            } => glob_matches(candidate, parts, *anchored_start, *anchored_end),
        }
    }
}

fn glob_matches(candidate: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let mut rest = candidate;
    let last = parts.len().saturating_sub(1);

    for (i, part) in parts.iter().enumerate() {
        if i == 0 && anchored_start {
            match rest.strip_prefix(part.as_str()) {
                Some(remaining) => rest = remaining,
                None => return false,
            }
            if i == last && anchored_end {
                return rest.is_empty();
            }
        } else if i == last && anchored_end {
            return rest.ends_with(part.as_str());
        } else {
            match rest.find(part.as_str()) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }
    }
    true
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only module path characters (alphanumeric, '-', '_', '.', '/', '~', '+') and '*' are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '~' | '+' | '*')
}
