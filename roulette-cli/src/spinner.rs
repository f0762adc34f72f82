use indicatif::{ProgressBar, ProgressStyle};

/// Start a spinner for a long-running request. Call `finish_and_clear`
/// when the operation completes.
pub(crate) fn start(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
