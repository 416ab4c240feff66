//! Sample gatherer: turns flat tab records into nested request/response
//! documents.

use super::aggregate::{FormRecord, Workspace};
use super::field::{flag_target, FieldValue, FLAG_PREFIX};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Subfields whose stored text is parsed as JSON.
const JSON_SUBFIELDS: [&str; 3] = ["headers", "payload", "data"];

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("tab \"{tab}\": field {field} is not valid JSON: {source}")]
    Parse {
        tab: String,
        field: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Subfields outside the registry, kept as text.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The exported document of one tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Samplest {
    pub request: RequestSample,
    pub response: ResponseSample,
}

impl RequestSample {
    fn place(&mut self, subfield: &str, value: Value) {
        match (subfield, value) {
            ("route", Value::String(text)) => self.route = Some(text),
            ("method", Value::String(text)) => self.method = Some(text),
            ("headers", value) => self.headers = Some(value),
            ("payload", value) => self.payload = Some(value),
            (other, value) => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }
}

impl ResponseSample {
    fn place(&mut self, subfield: &str, value: Value) {
        match (subfield, value) {
            ("status", Value::String(text)) => self.status = Some(text),
            ("headers", value) => self.headers = Some(value),
            ("data", value) => self.data = Some(value),
            (other, value) => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }
}

/// Drops every section whose flag is unset, then removes the flags.
fn strip_optional_sections(record: &FormRecord) -> FormRecord {
    let mut copy = record.clone();
    let flags: Vec<String> = copy
        .keys()
        .filter(|name| name.starts_with(FLAG_PREFIX))
        .cloned()
        .collect();

    for flag in flags {
        let enabled = copy.get(&flag).map(FieldValue::is_truthy).unwrap_or(false);
        if !enabled {
            if let Some(target) = flag_target(&flag) {
                copy.remove(target);
            }
        }
        copy.remove(&flag);
    }
    copy
}

/// Builds the document of one tab. The record itself is left untouched.
pub fn gather_record(tab: &str, record: &FormRecord) -> Result<Samplest, GatherError> {
    let mut sample = Samplest::default();

    for (name, value) in strip_optional_sections(record) {
        let Some((section, subfield)) = name.split_once('.') else {
            continue;
        };
        if section != "request" && section != "response" {
            continue;
        }

        let text = value.as_text();
        if text.is_empty() {
            continue;
        }

        let placed = if JSON_SUBFIELDS.contains(&subfield) {
            serde_json::from_str(&text).map_err(|source| GatherError::Parse {
                tab: tab.to_string(),
                field: name.clone(),
                source,
            })?
        } else {
            Value::String(text)
        };

        if section == "request" {
            sample.request.place(subfield, placed);
        } else {
            sample.response.place(subfield, placed);
        }
    }

    Ok(sample)
}

/// Documents of all tabs, in display order.
pub fn gather(workspace: &Workspace) -> Result<Vec<(String, Samplest)>, GatherError> {
    workspace
        .tabs()
        .iter()
        .map(|tab| Ok((tab.name.clone(), gather_record(&tab.name, &tab.record)?)))
        .collect()
}
