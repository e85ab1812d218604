//! Colored terminal rendering for schedcal types.

use owo_colors::OwoColorize;
use schedcal_core::intake::IntakeReport;
use schedcal_core::Event;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!("{} {}", self.title.bold(), time_range(self).dimmed())
    }
}

/// "2025-03-10 09:00-10:30", with the end date spelled out when it differs.
fn time_range(event: &Event) -> String {
    if event.start.date_naive() == event.end.date_naive() {
        format!(
            "{} {}-{}",
            event.start.format("%Y-%m-%d"),
            event.start.format("%H:%M"),
            event.end.format("%H:%M")
        )
    } else {
        format!(
            "{} to {}",
            event.start.format("%Y-%m-%d %H:%M"),
            event.end.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Render a batch outcome: admitted events in green, rejections in red.
pub fn render_report(report: &IntakeReport) -> String {
    let mut lines = Vec::new();

    for event in &report.admitted {
        lines.push(format!("  {} {}", "+".green(), event.render()));
    }

    for rejected in &report.rejected {
        lines.push(format!(
            "  {} {}: {}",
            "x".red(),
            rejected.label.bold(),
            rejected.error.to_string().red()
        ));
    }

    if lines.is_empty() {
        lines.push("  Nothing to schedule.".dimmed().to_string());
    }

    lines.join("\n")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
