//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Status line for a met precision target.
#[must_use]
pub fn status_ok(text: &str) -> String {
    if is_color_disabled() {
        format!("[OK] {text}")
    } else {
        format!("{} {text}", style("[OK]").green().bold())
    }
}

/// Status line for a missed precision target.
#[must_use]
pub fn status_fail(text: &str) -> String {
    if is_color_disabled() {
        format!("[FAIL] {text}")
    } else {
        format!("{} {text}", style("[FAIL]").red().bold())
    }
}

/// Status line for a comparison that could not be made.
#[must_use]
pub fn status_skip(text: &str) -> String {
    if is_color_disabled() {
        format!("[SKIP] {text}")
    } else {
        format!("{} {text}", style("[SKIP]").yellow().bold())
    }
}
