//! One-shot scheduling: free text in, schedule.ics out.

use std::path::PathBuf;

use anyhow::Result;
use schedcal_core::config::{self, SchedConfig};
use schedcal_core::intake;
use schedcal_core::schedule::{build_prompt, SchedulePolicy};
use schedcal_core::EventStore;

use super::{create_spinner, write_ics, EXPORT_FILE_NAME};
use crate::client::Client;
use crate::render::render_report;

pub async fn run(tasks: String, output: Option<PathBuf>) -> Result<()> {
    let config = SchedConfig::load()?;
    let tz = config.tz()?;
    let api_key = config::api_key()?;

    let current_date = chrono::Utc::now().with_timezone(&tz).date_naive();
    let prompt = build_prompt(&tasks, current_date, &SchedulePolicy::default());

    let client = Client::new(api_key, config.model.clone())?;

    let spinner = create_spinner("Scheduling...");
    let reply = client.schedule(&prompt).await;
    spinner.finish_and_clear();

    let mut store = EventStore::new();
    let report = intake::import_reply(&reply?, tz, &mut store)?;

    println!("{}", render_report(&report));

    if store.is_empty() {
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    write_ics(&store, &path)
}
