/// Filesystem adapters: license discovery and report output
mod file_writer;
mod license_finder;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use license_finder::RecursiveLicenseFinder;
