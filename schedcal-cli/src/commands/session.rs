//! Interactive planning session.
//!
//! One process run is one session: events accumulate in memory while the
//! loop runs and are gone when it exits. Export writes a snapshot of the
//! store; nothing else persists.

use std::path::Path;

use anyhow::Result;
use chrono_tz::Tz;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use schedcal_core::config::{self, SchedConfig};
use schedcal_core::intake;
use schedcal_core::schedule::{build_prompt, SchedulePolicy};
use schedcal_core::taskspec;
use schedcal_core::EventStore;

use super::{create_spinner, write_ics, EXPORT_FILE_NAME};
use crate::client::Client;
use crate::render::{render_report, Render};

const MENU: &[&str] = &[
    "Add task",
    "Schedule tasks with AI",
    "List events",
    "Export schedule.ics",
    "Quit",
];

pub async fn run() -> Result<()> {
    let config = SchedConfig::load()?;
    let tz = config.tz()?;

    let mut store = EventStore::new();

    println!("{}", "schedcal".bold());
    println!("{}", format!("  Timezone: {}", tz.name()).dimmed());
    println!();

    loop {
        let choice = Select::new()
            .with_prompt("  What next?")
            .items(MENU)
            .default(0)
            .interact()?;
        println!();

        match choice {
            0 => add_task(&mut store, tz)?,
            1 => schedule_with_ai(&mut store, tz, &config).await?,
            2 => list_events(&store),
            3 => export(&store)?,
            _ => break,
        }
        println!();
    }

    Ok(())
}

/// Manual entry: four raw strings, then the same admission gate every task
/// record passes through.
fn add_task(store: &mut EventStore, tz: Tz) -> Result<()> {
    let task_name: String = Input::new().with_prompt("  Task name").interact_text()?;
    let date: String = Input::new()
        .with_prompt("  Date (YYYY-MM-DD)")
        .interact_text()?;
    let start_time: String = Input::new()
        .with_prompt("  Start time (HH:MM)")
        .interact_text()?;
    let end_time: String = Input::new()
        .with_prompt("  End time (HH:MM)")
        .interact_text()?;

    let record = taskspec::manual_record(&task_name, &date, &start_time, &end_time);

    match intake::admit(&record, tz) {
        Ok(event) => {
            println!("{}", format!("  Added: {}", event.title).green());
            store.append(event);
        }
        Err(e) => eprintln!("  {}", e.to_string().red()),
    }

    Ok(())
}

async fn schedule_with_ai(store: &mut EventStore, tz: Tz, config: &SchedConfig) -> Result<()> {
    let api_key = match config::api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("  {}", e.to_string().red());
            return Ok(());
        }
    };

    let free_text: String = Input::new().with_prompt("  Your tasks").interact_text()?;

    let current_date = chrono::Utc::now().with_timezone(&tz).date_naive();
    let prompt = build_prompt(&free_text, current_date, &SchedulePolicy::default());

    let client = Client::new(api_key, config.model.clone())?;

    let spinner = create_spinner("  Scheduling...");
    let reply = client.schedule(&prompt).await;
    spinner.finish_and_clear();

    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("  {}", e.to_string().red());
            return Ok(());
        }
    };

    match intake::import_reply(&reply, tz, store) {
        Ok(report) => println!("{}", render_report(&report)),
        // A not-an-array reply; the error carries the raw text for diagnosis
        Err(e) => eprintln!("  {}", e.to_string().red()),
    }

    Ok(())
}

fn list_events(store: &EventStore) {
    if store.is_empty() {
        println!("{}", "  No events yet.".dimmed());
        return;
    }

    for event in store.snapshot() {
        println!("  {}", event.render());
    }
}

fn export(store: &EventStore) -> Result<()> {
    if store.is_empty() {
        println!("{}", "  No events to export.".dimmed());
        return Ok(());
    }

    write_ics(store, Path::new(EXPORT_FILE_NAME))
}
