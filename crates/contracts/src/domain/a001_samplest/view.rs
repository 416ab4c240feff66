//! View renderer: the control state shown for the current tab.

use super::aggregate::Workspace;
use super::field::{Control, FieldValue, FIELDS};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Workspace revision this state was rendered from, so that re-storing an
    /// identical value still pushes it back into the controls.
    revision: u64,
    controls: BTreeMap<&'static str, Control>,
    adjacent: BTreeMap<&'static str, bool>,
}

impl ViewState {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    pub fn text(&self, name: &str) -> String {
        self.control(name).map(|c| c.text.clone()).unwrap_or_default()
    }

    pub fn checked(&self, name: &str) -> bool {
        self.control(name).map(|c| c.checked).unwrap_or(false)
    }

    pub fn invalid(&self, name: &str) -> bool {
        self.control(name).map(|c| c.invalid).unwrap_or(false)
    }

    /// Whether the control adjacent to a flag field is shown.
    pub fn adjacent_visible(&self, name: &str) -> bool {
        self.adjacent.get(name).copied().unwrap_or(false)
    }
}

/// Writes every registered field of the current tab into a fresh control.
///
/// Missing and falsy values fall back to the field default. With no current
/// tab all controls show their defaults.
pub fn render(workspace: &Workspace) -> ViewState {
    let record = workspace.current_tab().map(|tab| &tab.record);
    let mut state = ViewState {
        revision: workspace.revision(),
        ..ViewState::default()
    };

    for field in FIELDS.iter() {
        let value: FieldValue = record
            .and_then(|r| r.get(field.name))
            .filter(|v| v.is_truthy())
            .cloned()
            .unwrap_or_else(|| field.default_value());

        let mut control = Control::default();
        field.kind.write(&mut control, &value);

        if field.adjacent {
            state.adjacent.insert(field.name, control.checked);
        }
        state.controls.insert(field.name, control);
    }

    state
}
