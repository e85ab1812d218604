//! Raw task records and schema validation.
//!
//! A task record is untrusted until it passes [`validate`], whether it came
//! from the manual entry form or from the scheduling service's decoded reply.
//! Both sources go through the identical gate.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{SchedCalError, SchedCalResult};

/// A schema-checked task record. Field values are still plain strings;
/// turning them into instants is the resolver's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub task_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Check a raw record against the required schema.
///
/// Every field must be present and a string, and `task_name` must be
/// non-empty after trimming. The first problem found is returned, naming the
/// offending field.
pub fn validate(raw: &Value) -> SchedCalResult<TaskSpec> {
    let record = raw.as_object().ok_or(SchedCalError::SchemaError {
        field: "task",
        problem: "is not a JSON object",
    })?;

    let task_name = required_string(record, "task_name")?;
    if task_name.trim().is_empty() {
        return Err(SchedCalError::SchemaError {
            field: "task_name",
            problem: "is empty",
        });
    }

    Ok(TaskSpec {
        task_name: task_name.trim().to_string(),
        date: required_string(record, "date")?,
        start_time: required_string(record, "start_time")?,
        end_time: required_string(record, "end_time")?,
    })
}

fn required_string(record: &Map<String, Value>, field: &'static str) -> SchedCalResult<String> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SchedCalError::SchemaError {
            field,
            problem: "is not a string",
        }),
        None => Err(SchedCalError::SchemaError {
            field,
            problem: "is missing",
        }),
    }
}

/// Assemble manual form input into the same raw record shape the scheduling
/// service produces, so both sources pass through the identical gate.
pub fn manual_record(task_name: &str, date: &str, start_time: &str, end_time: &str) -> Value {
    json!({
        "task_name": task_name,
        "date": date,
        "start_time": start_time,
        "end_time": end_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> Value {
        json!({
            "task_name": "Gym",
            "date": "2025-03-10",
            "start_time": "07:00",
            "end_time": "08:00",
        })
    }

    #[test]
    fn validate_accepts_complete_record() {
        let spec = validate(&full_record()).unwrap();
        assert_eq!(spec.task_name, "Gym");
        assert_eq!(spec.date, "2025-03-10");
        assert_eq!(spec.start_time, "07:00");
        assert_eq!(spec.end_time, "08:00");
    }

    #[test]
    fn validate_names_each_missing_field() {
        for field in ["task_name", "date", "start_time", "end_time"] {
            let mut record = full_record();
            record.as_object_mut().unwrap().remove(field);

            match validate(&record).unwrap_err() {
                SchedCalError::SchemaError {
                    field: named,
                    problem,
                } => {
                    assert_eq!(named, field);
                    assert_eq!(problem, "is missing");
                }
                other => panic!("Expected SchemaError, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_names_wrong_typed_field() {
        let mut record = full_record();
        record["date"] = json!(20250310);

        match validate(&record).unwrap_err() {
            SchedCalError::SchemaError { field, problem } => {
                assert_eq!(field, "date");
                assert_eq!(problem, "is not a string");
            }
            other => panic!("Expected SchemaError, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_blank_task_name() {
        let mut record = full_record();
        record["task_name"] = json!("   ");

        match validate(&record).unwrap_err() {
            SchedCalError::SchemaError { field, .. } => assert_eq!(field, "task_name"),
            other => panic!("Expected SchemaError, got {other:?}"),
        }
    }

    #[test]
    fn validate_trims_task_name() {
        let mut record = full_record();
        record["task_name"] = json!("  Gym  ");
        assert_eq!(validate(&record).unwrap().task_name, "Gym");
    }

    #[test]
    fn validate_rejects_non_object() {
        assert!(matches!(
            validate(&json!("just a string")).unwrap_err(),
            SchedCalError::SchemaError { .. }
        ));
    }

    #[test]
    fn manual_and_service_records_validate_identically() {
        let manual = manual_record("Gym", "2025-03-10", "07:00", "08:00");
        assert_eq!(validate(&manual).unwrap(), validate(&full_record()).unwrap());
    }
}
