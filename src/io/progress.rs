//! Progress display for library builds and mosaic composition

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over images (build) or rows (compose)
///
/// A hidden manager accepts the same calls and draws nothing.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressManager {
    /// Create a manager that draws to the terminal when `visible`
    pub fn new(visible: bool) -> Self {
        if visible {
            let bar = ProgressBar::new(0);
            bar.set_style(PROGRESS_STYLE.clone());
            Self { bar }
        } else {
            Self::hidden()
        }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Begin a run over `total` steps
    pub fn start(&self, label: &str, total: u64) {
        self.bar.set_prefix(label.to_string());
        self.bar.set_length(total);
        self.bar.set_position(0);
    }

    /// Complete one step, showing `message` beside the bar
    pub fn advance(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.inc(1);
    }

    /// Steps completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once the run is over
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
