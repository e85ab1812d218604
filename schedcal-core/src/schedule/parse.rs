//! Decoding of scheduling service replies.

use serde_json::Value;

use crate::error::{SchedCalError, SchedCalResult};

/// Decode a raw service reply into a sequence of unvalidated task records.
///
/// The reply must be exactly one JSON array; anything else (a decode error,
/// or a well-formed non-array value) is a [`SchedCalError::ParseFailure`]
/// carrying the reply verbatim so it can be shown to the user. Records are
/// not schema-checked here; that is [`crate::taskspec::validate`]'s job.
/// There is no partial recovery: a malformed reply fails as a whole.
pub fn parse_reply(raw: &str) -> SchedCalResult<Vec<Value>> {
    let parse_failure = || SchedCalError::ParseFailure {
        raw: raw.to_string(),
    };

    let value: Value = serde_json::from_str(raw.trim()).map_err(|_| parse_failure())?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(parse_failure()),
    }
}
