use std::fmt::Write as _;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::SubmitError;

/// The exact key set of the wire format, in lexicographic (byte-wise
/// ascending) order. The canonical serializer emits keys in this order no
/// matter how the input map was built.
pub const REQUIRED_KEYS: [&str; 6] = [
    "action_run_link",
    "email",
    "name",
    "repository_link",
    "resume_link",
    "timestamp",
];

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub repository_link: String,
    pub action_run_link: String,
}

impl SubmissionPayload {
    /// Build a payload from configuration, stamped with the current instant.
    pub fn from_config(config: &Config) -> Self {
        Self::with_timestamp(config, utc_timestamp_millis())
    }

    /// Build a payload with an explicit timestamp. Tests substitute a fixed
    /// instant here; production code goes through [`Self::from_config`].
    pub fn with_timestamp(config: &Config, timestamp: String) -> Self {
        SubmissionPayload {
            timestamp,
            name: config.name.clone(),
            email: config.email.clone(),
            resume_link: config.resume_link.clone(),
            repository_link: config.repository_link.clone(),
            action_run_link: config.action_run_link.clone(),
        }
    }

    pub fn fields(&self) -> Result<Map<String, Value>, SubmitError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(SubmitError::InvalidPayload(
                "payload did not serialize to a JSON object".to_string(),
            )),
        }
    }

    /// The exact byte sequence that is both transmitted and signed.
    pub fn canonical_json(&self) -> Result<String, SubmitError> {
        to_canonical_json(&self.fields()?)
    }
}

/// Current UTC wall-clock time as ISO 8601 with millisecond precision and a
/// literal `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`.
pub fn utc_timestamp_millis() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize the six payload fields to canonical JSON: keys in lexicographic
/// order, no insignificant whitespace, minimal escaping, non-ASCII emitted
/// as literal UTF-8. Identical field values produce bit-identical output.
///
/// Rejects maps with a missing required key, a non-string value, or any key
/// outside the fixed six.
pub fn to_canonical_json(fields: &Map<String, Value>) -> Result<String, SubmitError> {
    for key in fields.keys() {
        if !REQUIRED_KEYS.contains(&key.as_str()) {
            return Err(SubmitError::InvalidPayload(format!("unexpected key: {key}")));
        }
    }

    let mut out = String::from("{");
    for (i, key) in REQUIRED_KEYS.iter().enumerate() {
        let value = fields
            .get(*key)
            .ok_or_else(|| SubmitError::InvalidPayload(format!("missing required key: {key}")))?;
        let Value::String(text) = value else {
            return Err(SubmitError::InvalidPayload(format!(
                "value for key {key} is not a string"
            )));
        };

        if i > 0 {
            out.push(',');
        }
        emit_string(key, &mut out);
        out.push(':');
        emit_string(text, &mut out);
    }
    out.push('}');

    Ok(out)
}

/// Emit a string with the minimal escaping JSON requires (RFC 8785
/// §3.2.2.2): quote, backslash, and C0 control characters only. Everything
/// else, non-ASCII included, passes through as raw UTF-8.
fn emit_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if ('\u{0000}'..='\u{001F}').contains(&c) => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
