use crate::compliance::domain::Module;
use crate::shared::{CancellationToken, Result};
use std::path::Path;

/// ModuleResolver port: enumerates the dependency modules of a project
pub trait ModuleResolver {
    /// Resolves every dependency module of the project in `project_dir`
    ///
    /// # Returns
    /// Modules in provider order. A module whose source is not available
    /// locally has no `dir`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The dependency declarations are malformed
    /// - The provider cannot be invoked or reports a failure
    /// - `cancel` fires before resolution completes
    fn resolve(&self, project_dir: &Path, cancel: &CancellationToken) -> Result<Vec<Module>>;
}
