/// ProgressReporter port for reporting progress during a graph build
///
/// Progress and warnings go through this port so that stdout stays
/// reserved for the formatted graph.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress over a known number of items
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports an advisory warning; routed like errors unless overridden
    fn report_warning(&self, message: &str) {
        self.report_error(&format!("⚠️  Warning: {}", message));
    }

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
