pub mod config;
pub mod plan;
pub mod session;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use schedcal_core::EventStore;

use crate::render::pluralize;

/// Default export file name.
pub const EXPORT_FILE_NAME: &str = "schedule.ics";

pub(crate) fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Serialize the store's snapshot and write the .ics file.
pub(crate) fn write_ics(store: &EventStore, path: &Path) -> Result<()> {
    let ics = schedcal_core::ics::generate_ics(store.snapshot())?;

    std::fs::write(path, ics).with_context(|| format!("Could not write {}", path.display()))?;

    println!(
        "{}",
        format!(
            "  Exported {} {} to {}",
            store.len(),
            pluralize("event", store.len()),
            path.display()
        )
        .green()
    );

    Ok(())
}
