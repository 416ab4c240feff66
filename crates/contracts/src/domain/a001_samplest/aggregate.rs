use super::field::{descriptor, FieldValue, SEEDED_FIELDS};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Name of the tab created when the last one is removed.
pub const FALLBACK_TAB_NAME: &str = "Default";

/// Field values of one tab, keyed by qualified field name.
pub type FormRecord = BTreeMap<String, FieldValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub Uuid);

impl TabId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("A tab with the name \"{0}\" already exists")]
    DuplicateName(String),

    #[error("Tab {0} does not exist")]
    UnknownTab(TabId),
}

/// Result of a rename that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// The new name was blank or equal to the current one.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub name: String,
    pub record: FormRecord,
}

/// All tabs of the editor in display order, plus the active-tab tracker.
///
/// Tab names are unique among live tabs. Once any tab has been created there
/// is always a current tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    tabs: Vec<Tab>,
    current: Option<TabId>,
    previous: Option<TabId>,
    /// Bumped on every field write, even when the stored value is unchanged.
    revision: u64,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn current(&self) -> Option<TabId> {
        self.current
    }

    pub fn previous(&self) -> Option<TabId> {
        self.previous
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn tab_by_name(&self, name: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.name == name)
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.current.and_then(|id| self.tab(id))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.tab_by_name(name).is_some()
    }

    fn tab_mut(&mut self, id: TabId) -> Result<&mut Tab, WorkspaceError> {
        self.tabs
            .iter_mut()
            .find(|tab| tab.id == id)
            .ok_or(WorkspaceError::UnknownTab(id))
    }

    /// Registers a new tab with a seeded record and activates it.
    pub fn create_tab(&mut self, name: &str) -> Result<TabId, WorkspaceError> {
        if self.contains_name(name) {
            return Err(WorkspaceError::DuplicateName(name.to_string()));
        }

        let record: FormRecord = SEEDED_FIELDS
            .iter()
            .filter_map(|field| descriptor(field))
            .map(|field| (field.name.to_string(), field.default_value()))
            .collect();

        let id = TabId::new_v4();
        self.tabs.push(Tab {
            id,
            name: name.to_string(),
            record,
        });
        log::debug!("tab created: '{}' ({} total)", name, self.tabs.len());

        self.activate(id)?;
        Ok(id)
    }

    pub fn rename_tab(&mut self, id: TabId, new_name: &str) -> Result<RenameOutcome, WorkspaceError> {
        let trimmed = new_name.trim();
        let current_name = self.tab(id).ok_or(WorkspaceError::UnknownTab(id))?.name.clone();

        if trimmed.is_empty() || trimmed == current_name.trim() {
            return Ok(RenameOutcome::Unchanged);
        }
        if self.tabs.iter().any(|tab| tab.id != id && tab.name == trimmed) {
            return Err(WorkspaceError::DuplicateName(trimmed.to_string()));
        }

        self.tab_mut(id)?.name = trimmed.to_string();
        log::debug!("tab renamed: '{}' -> '{}'", current_name, trimmed);
        Ok(RenameOutcome::Renamed)
    }

    /// Removes a tab and its record, then activates the first remaining tab or
    /// a fresh fallback tab.
    pub fn remove_tab(&mut self, id: TabId) -> Result<(), WorkspaceError> {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or(WorkspaceError::UnknownTab(id))?;
        let removed = self.tabs.remove(index);
        log::debug!("tab removed: '{}'", removed.name);

        if self.previous == Some(id) {
            self.previous = None;
        }
        if self.current == Some(id) {
            self.current = None;
        }

        match self.tabs.first().map(|tab| tab.id) {
            Some(first) => self.activate(first),
            None => self.create_tab(FALLBACK_TAB_NAME).map(|_| ()),
        }
    }

    pub fn activate(&mut self, id: TabId) -> Result<(), WorkspaceError> {
        if self.tab(id).is_none() {
            return Err(WorkspaceError::UnknownTab(id));
        }
        self.previous = self.current;
        self.current = Some(id);
        Ok(())
    }

    pub fn record(&self, id: TabId) -> Option<&FormRecord> {
        self.tab(id).map(|tab| &tab.record)
    }

    /// Replaces a tab's record wholesale (snapshot restore).
    pub fn assign_record(&mut self, id: TabId, record: FormRecord) -> Result<(), WorkspaceError> {
        self.tab_mut(id)?.record = record;
        Ok(())
    }

    pub fn set_field(
        &mut self,
        id: TabId,
        name: &str,
        value: FieldValue,
    ) -> Result<(), WorkspaceError> {
        self.tab_mut(id)?.record.insert(name.to_string(), value);
        self.revision += 1;
        Ok(())
    }

    /// Stores a value on the current tab; ignored when there is none.
    pub fn set_current_field(&mut self, name: &str, value: FieldValue) -> Result<(), WorkspaceError> {
        match self.current {
            Some(id) => self.set_field(id, name, value),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ws: &Workspace) -> Vec<&str> {
        ws.tabs().iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_create_seeds_defaults_and_activates() {
        let mut ws = Workspace::new();
        let a = ws.create_tab("A").unwrap();
        assert_eq!(ws.current(), Some(a));

        let record = ws.record(a).unwrap();
        assert_eq!(record.get("request.method"), Some(&FieldValue::from("get")));
        assert_eq!(record.get("response.status"), Some(&FieldValue::from("200")));
        assert_eq!(record.len(), 2);

        let b = ws.create_tab("B").unwrap();
        assert_eq!(ws.current(), Some(b));
        assert_eq!(ws.previous(), Some(a));
    }

    #[test]
    fn test_duplicate_create_fails() {
        let mut ws = Workspace::new();
        let a = ws.create_tab("A").unwrap();
        assert_eq!(
            ws.create_tab("A"),
            Err(WorkspaceError::DuplicateName("A".to_string()))
        );
        assert_eq!(names(&ws), vec!["A"]);
        assert_eq!(ws.current(), Some(a));
    }

    #[test]
    fn test_rename() {
        let mut ws = Workspace::new();
        let a = ws.create_tab("A").unwrap();
        ws.create_tab("B").unwrap();

        assert_eq!(ws.rename_tab(a, "   "), Ok(RenameOutcome::Unchanged));
        assert_eq!(ws.rename_tab(a, " A "), Ok(RenameOutcome::Unchanged));
        assert_eq!(
            ws.rename_tab(a, "B"),
            Err(WorkspaceError::DuplicateName("B".to_string()))
        );
        assert_eq!(names(&ws), vec!["A", "B"]);

        assert_eq!(ws.rename_tab(a, "  C "), Ok(RenameOutcome::Renamed));
        assert_eq!(names(&ws), vec!["C", "B"]);
        assert!(!ws.contains_name("A"));
        // the old name is free again
        assert!(ws.create_tab("A").is_ok());
    }

    #[test]
    fn test_remove_activates_first_remaining() {
        let mut ws = Workspace::new();
        let a = ws.create_tab("A").unwrap();
        let b = ws.create_tab("B").unwrap();
        let c = ws.create_tab("C").unwrap();

        ws.remove_tab(c).unwrap();
        assert_eq!(ws.current(), Some(a));
        assert!(ws.record(c).is_none());

        ws.activate(b).unwrap();
        ws.remove_tab(a).unwrap();
        assert_eq!(ws.current(), Some(b));
        assert_eq!(names(&ws), vec!["B"]);
    }

    #[test]
    fn test_remove_last_creates_default() {
        let mut ws = Workspace::new();
        let a = ws.create_tab("A").unwrap();
        ws.set_field(a, "request.route", "/x".into()).unwrap();

        ws.remove_tab(a).unwrap();
        assert_eq!(names(&ws), vec![FALLBACK_TAB_NAME]);
        let current = ws.current_tab().unwrap();
        assert_eq!(current.name, FALLBACK_TAB_NAME);
        assert!(current.record.get("request.route").is_none());
    }

    #[test]
    fn test_unknown_tab() {
        let mut ws = Workspace::new();
        ws.create_tab("A").unwrap();
        let stale = TabId::new_v4();
        assert_eq!(ws.activate(stale), Err(WorkspaceError::UnknownTab(stale)));
        assert_eq!(ws.remove_tab(stale), Err(WorkspaceError::UnknownTab(stale)));
        assert_eq!(ws.len(), 1);
    }

    #[test]
    fn test_activate_current_tab_updates_previous() {
        let mut ws = Workspace::new();
        let a = ws.create_tab("A").unwrap();
        let b = ws.create_tab("B").unwrap();
        assert_eq!(ws.previous(), Some(a));

        ws.activate(b).unwrap();
        assert_eq!(ws.current(), Some(b));
        assert_eq!(ws.previous(), Some(b));
    }

    #[test]
    fn test_set_field_bumps_revision() {
        let mut ws = Workspace::new();
        let a = ws.create_tab("A").unwrap();
        let before = ws.revision();
        ws.set_field(a, "request.route", "/x".into()).unwrap();
        ws.set_field(a, "request.route", "/x".into()).unwrap();
        assert_eq!(ws.revision(), before + 2);
    }

    #[test]
    fn test_set_current_field() {
        let mut ws = Workspace::new();
        ws.set_current_field("request.route", "/ignored".into()).unwrap();
        assert!(ws.is_empty());

        let a = ws.create_tab("A").unwrap();
        ws.set_current_field("_request.headers", true.into()).unwrap();
        assert_eq!(
            ws.record(a).unwrap().get("_request.headers"),
            Some(&FieldValue::Flag(true))
        );
    }
}
