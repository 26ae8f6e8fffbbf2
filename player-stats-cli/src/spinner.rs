//! Progress spinner shown while waiting on the API.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Start a ticking spinner with `msg`. Hidden entirely when `quiet` is set.
pub(crate) fn start(msg: impl Into<String>, quiet: bool) -> ProgressBar {
    let pb = if quiet {
        ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
    } else {
        ProgressBar::new_spinner()
    };
    let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("/-\\|");
    pb.set_style(style);
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run `f` behind a spinner and clear it afterwards, whatever the outcome.
pub(crate) fn with_spinner<T>(msg: impl Into<String>, quiet: bool, f: impl FnOnce() -> T) -> T {
    let pb = start(msg, quiet);
    let result = f();
    pb.finish_and_clear();
    result
}
