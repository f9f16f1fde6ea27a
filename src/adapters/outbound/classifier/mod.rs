/// License classification adapters
mod matcher_classifier;
mod phrase_matcher;

pub use matcher_classifier::MatcherLicenseClassifier;
pub use phrase_matcher::PhraseLicenseMatcher;
