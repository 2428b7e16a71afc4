use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

// ── Styles ──────────────────────────────────────────────────────────────────

pub fn style_success() -> Style {
    Style::new().green()
}

pub fn style_warn() -> Style {
    Style::new().yellow()
}

pub fn style_info() -> Style {
    Style::new().cyan()
}

pub fn style_bold() -> Style {
    Style::new().bold()
}

pub fn style_dim() -> Style {
    Style::new().dim()
}

// ── Output helpers ──────────────────────────────────────────────────────────

/// Print a success message with a checkmark.
pub fn print_success(msg: &str) {
    println!("  {} {}", style_success().apply_to("✓"), msg);
}

/// Print a labelled value, or a dimmed placeholder when absent.
pub fn print_field(label: &str, value: Option<&str>) {
    let rendered = match value {
        Some(v) => style_info().apply_to(v).to_string(),
        None => style_dim().apply_to("(none)").to_string(),
    };
    println!("  {:<10} {}", style_bold().apply_to(label), rendered);
}

/// Spinner shown while waiting on the name service.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
