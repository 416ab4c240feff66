//! Snapshot codec: the whole workspace as one JSON object of
//! `{tab name -> record}`, in tab display order.

use super::aggregate::{FormRecord, Workspace};
use super::field::FieldValue;
use crate::shared::config::TabsConfig;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot is not a JSON object")]
    NotAnObject,
}

/// How the workspace came to be at startup.
#[derive(Debug)]
pub enum RestoreOutcome {
    /// Nothing was saved before.
    FirstVisit,
    Restored { tabs: usize },
    /// The saved snapshot was unreadable and must be discarded.
    Recovered(SnapshotError),
}

pub fn encode(workspace: &Workspace) -> Result<String, serde_json::Error> {
    let mut state = Map::new();
    for tab in workspace.tabs() {
        state.insert(tab.name.clone(), serde_json::to_value(&tab.record)?);
    }
    serde_json::to_string(&Value::Object(state))
}

/// Parses a stored snapshot into `(tab name, record)` pairs in stored order.
///
/// Only an unreadable document fails. A tab whose record is not an object is
/// skipped, and a field holding an array or object is dropped; both are
/// logged.
pub fn decode(text: &str) -> Result<Vec<(String, FormRecord)>, SnapshotError> {
    let Value::Object(state) = serde_json::from_str::<Value>(text)? else {
        return Err(SnapshotError::NotAnObject);
    };

    let tabs = state
        .into_iter()
        .filter_map(|(name, content)| {
            let Value::Object(fields) = content else {
                log::warn!("Skipping saved tab '{}': record is not an object", name);
                return None;
            };
            let record = fields
                .into_iter()
                .filter_map(|(field, value)| match FieldValue::from_json(&value) {
                    Some(value) => Some((field, value)),
                    None => {
                        log::warn!("Dropping field '{}' of saved tab '{}'", field, name);
                        None
                    }
                })
                .collect();
            Some((name, record))
        })
        .collect();
    Ok(tabs)
}

/// Rebuilds the workspace from the stored snapshot, if any.
///
/// Restored tabs are activated in order, so the last one ends up current. The
/// result always holds at least one tab.
pub fn restore(snapshot: Option<&str>, names: &TabsConfig) -> (Workspace, RestoreOutcome) {
    let mut workspace = Workspace::new();

    let outcome = match snapshot.map(decode) {
        None => RestoreOutcome::FirstVisit,
        Some(Err(e)) => {
            log::warn!("Cannot restore last state because: {}", e);
            RestoreOutcome::Recovered(e)
        }
        Some(Ok(tabs)) => {
            for (name, record) in tabs {
                let assigned = workspace
                    .create_tab(&name)
                    .and_then(|id| workspace.assign_record(id, record));
                if let Err(e) = assigned {
                    log::warn!("Skipping saved tab '{}': {}", name, e);
                }
            }
            RestoreOutcome::Restored {
                tabs: workspace.len(),
            }
        }
    };

    if workspace.is_empty() {
        let name = match outcome {
            RestoreOutcome::Recovered(_) => &names.recovered,
            _ => &names.first_visit,
        };
        if let Err(e) = workspace.create_tab(name) {
            log::error!("Cannot open startup tab '{}': {}", name, e);
        }
    }

    (workspace, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_samplest::view::render;
    use crate::shared::config::EditorConfig;

    fn names_config() -> TabsConfig {
        EditorConfig::default().tabs
    }

    #[test]
    fn test_first_visit() {
        let (ws, outcome) = restore(None, &names_config());
        assert!(matches!(outcome, RestoreOutcome::FirstVisit));
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.current_tab().unwrap().name, "Hello world");
    }

    #[test]
    fn test_restore_single_tab() {
        let (ws, outcome) = restore(Some(r#"{"T1": {"response.status": "404"}}"#), &names_config());
        assert!(matches!(outcome, RestoreOutcome::Restored { tabs: 1 }));
        assert_eq!(ws.len(), 1);

        let tab = ws.current_tab().unwrap();
        assert_eq!(tab.name, "T1");
        // the record is assigned as stored, without seeded defaults
        assert_eq!(tab.record.len(), 1);

        let view = render(&ws);
        let status = view.control("response.status").unwrap();
        assert_eq!(status.selected.as_deref(), Some("404"));
    }

    #[test]
    fn test_corrupt_snapshot() {
        let (ws, outcome) = restore(Some("{bad"), &names_config());
        assert!(matches!(
            outcome,
            RestoreOutcome::Recovered(SnapshotError::Malformed(_))
        ));
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.current_tab().unwrap().name, "Welcome back");
    }

    #[test]
    fn test_non_object_snapshot_is_corrupt() {
        assert!(matches!(decode("[1, 2]"), Err(SnapshotError::NotAnObject)));
        assert!(matches!(decode("\"text\""), Err(SnapshotError::NotAnObject)));
    }

    #[test]
    fn test_bad_records_do_not_lose_other_tabs() {
        let text = r#"{
            "A": "text",
            "B": {"request.headers": {"nested": true}, "request.route": "/b"},
            "C": {"response.status": "500"}
        }"#;
        let tabs = decode(text).unwrap();
        let names: Vec<&str> = tabs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(tabs[0].1.len(), 1);
        assert_eq!(tabs[0].1.get("request.route"), Some(&FieldValue::from("/b")));

        let (ws, outcome) = restore(Some(text), &names_config());
        assert!(matches!(outcome, RestoreOutcome::Restored { tabs: 2 }));
        assert_eq!(ws.current_tab().unwrap().name, "C");
    }

    #[test]
    fn test_empty_snapshot_opens_first_visit_tab() {
        let (ws, outcome) = restore(Some("{}"), &names_config());
        assert!(matches!(outcome, RestoreOutcome::Restored { tabs: 0 }));
        assert_eq!(ws.current_tab().unwrap().name, "Hello world");
    }

    #[test]
    fn test_round_trip_keeps_order_and_values() {
        let mut ws = Workspace::new();
        let z = ws.create_tab("Zeta").unwrap();
        ws.set_field(z, "_request.headers", true.into()).unwrap();
        ws.set_field(z, "request.headers", "{}".into()).unwrap();
        let a = ws.create_tab("Alpha").unwrap();
        ws.set_field(a, "request.route", "/alpha".into()).unwrap();

        let text = encode(&ws).unwrap();
        let (restored, _) = restore(Some(text.as_str()), &names_config());

        let names: Vec<&str> = restored.tabs().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(restored.current_tab().unwrap().name, "Alpha");
        for (before, after) in ws.tabs().iter().zip(restored.tabs()) {
            assert_eq!(before.record, after.record);
        }
    }
}
