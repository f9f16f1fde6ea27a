/// ProgressReporter port for user feedback during a run
///
/// Implementations write to stderr (or nowhere), never to stdout, which
/// carries only the report. Called from the thread driving the run.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through the module list
    ///
    /// # Arguments
    /// * `current` - Modules processed so far
    /// * `total` - Total number of modules
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
