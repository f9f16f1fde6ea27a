/// Console adapters for user feedback on stderr
mod progress_reporter;

pub use progress_reporter::{SilentProgressReporter, StderrProgressReporter};
