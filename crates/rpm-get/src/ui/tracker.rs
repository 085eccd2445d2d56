use std::cell::Cell;

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

const BAR_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

// No total: no bar, no ETA.
const SPINNER_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {bytes} ({bytes_per_sec}) {wide_msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static BAR_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(BAR_STYLE)
        .ok()
        .map(|style| style.tick_chars(TICK).progress_chars(PB_CHARS))
});

static SPINNER_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(SPINNER_STYLE)
        .ok()
        .map(|style| style.tick_chars(TICK))
});

/// Renders `(transferred, total)` callbacks. Starts as a spinner and turns
/// into a bar the first time a total is known.
pub struct ProgressTracker {
    pb: ProgressBar,
    determinate: Cell<bool>,
    touched: Cell<bool>,
    finish: Option<String>,
}

impl ProgressTracker {
    pub fn new(prefix: &str, hidden: bool) -> Self {
        let pb = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        if let Some(style) = SPINNER_TEMPLATE.as_ref() {
            pb.set_style(style.clone());
        }
        pb.set_prefix(prefix.to_string());
        Self {
            pb,
            determinate: Cell::new(false),
            touched: Cell::new(false),
            finish: None,
        }
    }

    #[must_use]
    pub fn with_finish(mut self, finish: &str) -> Self {
        self.finish = Some(finish.to_string());
        self
    }

    pub fn update(&self, transferred: u64, total: Option<u64>) {
        if let Some(total) = total {
            if !self.determinate.replace(true) {
                self.pb.set_length(total);
                if let Some(style) = BAR_TEMPLATE.as_ref() {
                    self.pb.set_style(style.clone());
                }
            }
        }
        self.touched.set(true);
        self.pb.set_position(transferred);
    }

    /// Leave the final state on screen, or clear it if nothing was drawn.
    pub fn finish(self) {
        if !self.touched.get() {
            self.pb.finish_and_clear();
            return;
        }
        match self.finish {
            Some(msg) => self.pb.finish_with_message(msg),
            None => self.pb.finish(),
        }
    }
}
