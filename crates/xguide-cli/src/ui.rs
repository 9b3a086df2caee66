//! Shared output primitives for catalog commands.

use colored::Colorize;
use xguide_catalog::{EngagementLevel, ExpectedEngagement};

/// Check line: passed (green checkmark).
pub fn check_ok(msg: &str) {
    println!("  {} {}", "\u{2714}".bright_green(), msg);
}

/// Check line: failed (red cross).
pub fn check_fail(msg: &str) {
    println!("  {} {}", "\u{2718}".bright_red(), msg.bright_red());
}

/// Section header: ">> Title" in cyan.
pub fn section(title: &str) {
    println!("  {} {}", ">>".bright_cyan().bold(), title.bold());
}

/// Key-value display: "  Label:       value".
pub fn kv(label: &str, value: &str) {
    println!("  {:<13}{}", format!("{label}:"), value);
}

/// Bulleted list under a heading. Prints nothing for an empty list.
pub fn bullets(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("  {}", heading.bold());
    for item in items {
        println!("    \u{2022} {item}");
    }
}

/// Indented block of free text (post examples keep their line breaks).
pub fn block(text: &str) {
    for line in text.lines() {
        println!("    {}", line.dimmed());
    }
}

/// Hint line: "  hint: message" in dimmed text.
pub fn hint(msg: &str) {
    println!("  {} {}", "hint:".dimmed(), msg.dimmed());
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "\u{2718}".bright_red(), msg.bright_red());
}

pub fn blank() {
    println!();
}

/// Compact "L:high R:low P:medium B:high" summary.
pub fn engagement_summary(e: &ExpectedEngagement) -> String {
    format!(
        "L:{} R:{} P:{} B:{}",
        e.likes, e.replies, e.reposts, e.bookmarks
    )
}

/// Colored level for detail views.
pub fn level(l: EngagementLevel) -> String {
    match l {
        EngagementLevel::High => l.to_string().bright_green().to_string(),
        EngagementLevel::Medium => l.to_string().yellow().to_string(),
        EngagementLevel::Low => l.to_string().dimmed().to_string(),
    }
}
