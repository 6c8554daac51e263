use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

/// Below this many records no progress bar is drawn
const PROGRESS_BAR_MIN_ITEMS: usize = 500;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it never interferes with the graph on stdout.
/// Large inventories get an indicatif progress bar while records are validated.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if total < PROGRESS_BAR_MIN_ITEMS {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_progress(5, 10, Some("test"));
        reporter.report_warning("Test warning");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_bar_only_for_large_inventories() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 10, None);
        assert!(reporter.progress_bar.borrow().is_none());

        reporter.report_progress(1, PROGRESS_BAR_MIN_ITEMS, Some("express"));
        assert!(reporter.progress_bar.borrow().is_some());

        reporter.report_completion("done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_error_clears_progress_bar() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, PROGRESS_BAR_MIN_ITEMS, None);
        reporter.report_error("failed");
        assert!(reporter.progress_bar.borrow().is_none());
    }
}
