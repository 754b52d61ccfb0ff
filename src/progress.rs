//! Spinner display while an external tool runs

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Spinner shown on stderr for the lifetime of one tool invocation.
///
/// Draws nothing when stderr is not a terminal.
pub struct ToolSpinner {
    pb: ProgressBar,
}

impl ToolSpinner {
    /// Start a spinner with the given message
    pub fn start(message: impl Into<String>) -> Self {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for ToolSpinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
