//! Progress indicators for the summarization steps
//!
//! Spinners draw on stderr and stay hidden when stderr is not a terminal, so
//! piped or captured runs see only log lines and the JSON result.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Numbered step reporting for one accession, e.g. `[P04637] [2/5] Extracting fields`
///
/// The spinner is cleared when the tracker is dropped, whether the pipeline
/// finished or bailed out early.
pub struct StepProgress {
    accession: String,
    total: usize,
    bar: ProgressBar,
}

impl StepProgress {
    pub fn start(accession: &str, total: usize) -> Self {
        Self {
            accession: accession.to_string(),
            total,
            bar: create_spinner(&format!("[{accession}] Starting summarization")),
        }
    }

    /// Announce step `index` (1-based)
    pub fn step(&self, index: usize, message: &str) {
        info!(accession = %self.accession, step = index, total = self.total, "{message}");
        self.bar.set_message(self.label(index, message));
    }

    /// Run `f` with the spinner hidden, for output that must not interleave
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    fn label(&self, index: usize, message: &str) -> String {
        format!("[{}] [{}/{}] {}", self.accession, index, self.total, message)
    }
}

impl Drop for StepProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_spinner() {
        let pb = create_spinner("Processing...");
        assert!(!pb.is_finished());
        pb.finish();
        assert!(pb.is_finished());
    }

    #[test]
    fn test_step_label() {
        let progress = StepProgress::start("P04637", 5);
        assert_eq!(progress.label(2, "Extracting fields"), "[P04637] [2/5] Extracting fields");
    }

    #[test]
    fn test_suspend_returns_closure_value() {
        let progress = StepProgress::start("P04637", 5);
        assert_eq!(progress.suspend(|| 42), 42);
    }
}
