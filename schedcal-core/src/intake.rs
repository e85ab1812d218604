//! Admission pipeline: raw task records into validated events.
//!
//! One record is admitted in four steps: schema validation, start and end
//! resolution in the configured timezone, ordering check, append. Batches
//! from the scheduling service add one rule on top: a reply that isn't a
//! JSON array fails as a whole, while individual bad records only reject
//! themselves.

use chrono_tz::Tz;
use serde_json::Value;

use crate::error::{SchedCalError, SchedCalResult};
use crate::event::Event;
use crate::resolve::{resolve, validate_order};
use crate::schedule::parse_reply;
use crate::store::EventStore;
use crate::taskspec;

/// Outcome of admitting one batch of task records.
#[derive(Debug, Default)]
pub struct IntakeReport {
    pub admitted: Vec<Event>,
    pub rejected: Vec<RejectedTask>,
}

/// A task record that failed admission, labeled for user display.
#[derive(Debug)]
pub struct RejectedTask {
    pub label: String,
    pub error: SchedCalError,
}

/// Turn one raw task record into a validated event.
pub fn admit(raw: &Value, tz: Tz) -> SchedCalResult<Event> {
    let spec = taskspec::validate(raw)?;
    let start = resolve(&spec.date, &spec.start_time, tz)?;
    let end = resolve(&spec.date, &spec.end_time, tz)?;
    validate_order(&start, &end)?;
    Ok(Event::new(spec.task_name, start, end))
}

/// Import a raw service reply into the store.
///
/// A reply that is not a JSON array fails as a whole with
/// [`SchedCalError::ParseFailure`] and leaves the store untouched. Records
/// are otherwise admitted independently: a rejected record is reported by
/// name in the [`IntakeReport`] but does not block its valid siblings.
pub fn import_reply(
    raw_reply: &str,
    tz: Tz,
    store: &mut EventStore,
) -> SchedCalResult<IntakeReport> {
    let records = parse_reply(raw_reply)?;

    let mut report = IntakeReport::default();
    for (index, record) in records.iter().enumerate() {
        match admit(record, tz) {
            Ok(event) => {
                store.append(event.clone());
                report.admitted.push(event);
            }
            Err(error) => report.rejected.push(RejectedTask {
                label: task_label(record, index),
                error,
            }),
        }
    }

    Ok(report)
}

/// Best label for reporting a rejected record: its task name, or its
/// position when the name itself is unusable.
fn task_label(record: &Value, index: usize) -> String {
    match record.get("task_name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => format!("task #{}", index + 1),
    }
}
