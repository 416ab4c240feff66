use crate::domain::a001_samplest::ui::panel::Panel;
use crate::shared::{dialogs, export, storage};
use contracts::domain::a001_samplest::field::descriptor;
use contracts::domain::a001_samplest::gather::gather;
use contracts::domain::a001_samplest::snapshot;
use contracts::domain::a001_samplest::{
    render, Control, RenameOutcome, TabId, ViewState, Workspace, WorkspaceError,
};
use contracts::shared::config::EditorConfig;
use leptos::prelude::*;

/// Editor state shared through context.
///
/// `workspace` is the single source of truth; `view` is derived from it, so
/// every mutation re-renders the controls of the current tab.
#[derive(Clone, Copy)]
pub struct EditorContext {
    pub workspace: RwSignal<Workspace>,
    pub view: Memo<ViewState>,
    pub panel: RwSignal<Panel>,
    pub exporting: RwSignal<bool>,
    config: StoredValue<EditorConfig>,
}

impl EditorContext {
    pub fn new(workspace: Workspace, config: EditorConfig) -> Self {
        let workspace = RwSignal::new(workspace);
        Self {
            workspace,
            view: Memo::new(move |_| workspace.with(render)),
            panel: RwSignal::new(Panel::default()),
            exporting: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> EditorConfig {
        self.config.get_value()
    }

    fn apply<T>(
        &self,
        op: impl FnOnce(&mut Workspace) -> Result<T, WorkspaceError>,
    ) -> Result<Option<T>, WorkspaceError> {
        self.workspace.try_update(op).transpose()
    }

    pub fn create_tab(&self, name: &str) -> Result<(), WorkspaceError> {
        log::debug!("create_tab: '{}'", name);
        self.apply(|ws| ws.create_tab(name)).map(|_| ())
    }

    pub fn rename_tab(&self, id: TabId, new_name: &str) -> Result<RenameOutcome, WorkspaceError> {
        log::debug!("rename_tab: {} -> '{}'", id, new_name);
        self.apply(|ws| ws.rename_tab(id, new_name))
            .map(|outcome| outcome.unwrap_or(RenameOutcome::Unchanged))
    }

    pub fn close_tab(&self, id: TabId) -> Result<(), WorkspaceError> {
        log::debug!("close_tab: {}", id);
        self.apply(|ws| ws.remove_tab(id)).map(|_| ())
    }

    pub fn activate_tab(&self, id: TabId) -> Result<(), WorkspaceError> {
        self.apply(|ws| ws.activate(id)).map(|_| ())
    }

    /// Stores what the user entered into a control on the current tab.
    pub fn commit_control(&self, name: &'static str, control: Control) {
        let Some(field) = descriptor(name) else {
            log::warn!("commit for unregistered field {}", name);
            return;
        };
        let Some(value) = field.commit(&control) else {
            log::debug!("nothing to store for {} yet", name);
            return;
        };
        if let Err(e) = self.apply(|ws| ws.set_current_field(name, value)) {
            log::error!("cannot store {}: {}", name, e);
        }
    }

    /// Writes the snapshot of every tab to localStorage.
    pub fn persist(&self) {
        let key = self.config.with_value(|c| c.storage.key.clone());
        let saved = self
            .workspace
            .with_untracked(snapshot::encode)
            .map_err(|e| e.to_string())
            .and_then(|text| storage::save_snapshot(&key, &text));
        match saved {
            Ok(()) => log::debug!("workspace saved under '{}'", key),
            Err(e) => log::error!("cannot save workspace: {}", e),
        }
    }

    /// Gathers all samples now and zips them in a background task.
    pub fn export(&self) {
        if self.exporting.get_untracked() {
            return;
        }

        let samples = match self.workspace.with_untracked(gather) {
            Ok(samples) => samples,
            Err(e) => {
                log::error!("export aborted: {}", e);
                dialogs::alert(&format!("Cannot export samples: {}", e));
                return;
            }
        };
        let filename = self.config.with_value(|c| c.export.archive_name.clone());
        let exporting = self.exporting;

        exporting.set(true);
        leptos::task::spawn_local(async move {
            // let the disabled button paint before encoding
            gloo_timers::future::TimeoutFuture::new(0).await;
            if let Err(e) = export::export_archive(&samples, &filename) {
                log::error!("export failed: {}", e);
                dialogs::alert(&format!("Cannot export samples: {}", e));
            }
            exporting.set(false);
        });
    }
}

/// Hook to use the editor context.
pub fn use_editor() -> EditorContext {
    use_context::<EditorContext>().expect("EditorContext not found. Provide it in App.")
}
