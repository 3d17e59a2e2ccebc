//! Stage spinner shown while images are loaded, compared and saved

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
});

/// Single-line spinner naming the pipeline stage in progress
///
/// A hidden spinner accepts every call but draws nothing, so callers never
/// branch on whether progress is shown.
pub struct StageProgress {
    bar: ProgressBar,
}

impl StageProgress {
    /// Create a spinner, drawn only when `visible` is set
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(STAGE_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            bar
        } else {
            ProgressBar::hidden()
        };

        Self { bar }
    }

    /// Announce the stage now running
    pub fn stage(&self, message: &'static str) {
        self.bar.set_message(message);
    }

    /// Clear the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
