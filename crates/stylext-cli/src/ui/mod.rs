//! Terminal output for command progress and results.
//!
//! Status lines go to stderr so stdout stays free for piping.

mod format;
mod messages;

pub use format::{format_size, print_build_summary};
pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to terminal
/// detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decide once whether status output is colored.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    messages::set_color(enabled);
}
