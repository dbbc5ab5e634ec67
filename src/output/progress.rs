use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for multi-file scans.
///
/// Hidden in quiet mode or when stderr is not a TTY, so piped output never
/// carries control sequences. Draws on stderr to keep stdout clean for the
/// report.
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl ScanProgress {
    /// # Panics
    ///
    /// Panics if the progress template is invalid; the template is a
    /// compile-time constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet || !std::io::stderr().is_terminal() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} Analyzing [{bar:40.cyan/blue}] {pos}/{len} files")
                    .expect("valid template")
                    .progress_chars("█▓░"),
            );
            bar
        };

        Self {
            bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Thread-safe increment, usable from rayon workers.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.set_position(count);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
