use crate::compliance::domain::Module;
use crate::shared::{CancellationToken, Result};
use std::path::PathBuf;

/// LicenseFinder port: locates license-bearing files inside one module
///
/// Implementations must be shareable across threads, the aggregator may
/// search several modules at once.
pub trait LicenseFinder: Send + Sync {
    /// Returns absolute paths of candidate license files, in a deterministic order
    ///
    /// A module without a local directory yields an empty list.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be traversed, or
    /// `LicenseError::Cancelled` if `cancel` fires mid-walk.
    fn find(&self, module: &Module, cancel: &CancellationToken) -> Result<Vec<PathBuf>>;
}
