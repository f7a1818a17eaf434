//! Spinner shown while a content folder is being scanned.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// A single-line spinner; hidden when output must stay clean.
pub(crate) struct ScanSpinner {
    pb: ProgressBar,
}

impl ScanSpinner {
    /// Start a spinner with `msg`. When `hidden` is true nothing is drawn.
    pub(crate) fn start(msg: String, hidden: bool) -> Self {
        let pb = ProgressBar::new_spinner();
        if hidden {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");
        pb.set_style(style);
        pb.set_message(msg);
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// Stop ticking and clear the line.
    pub(crate) fn finish(self) {
        self.pb.disable_steady_tick();
        self.pb.finish_and_clear();
    }
}
