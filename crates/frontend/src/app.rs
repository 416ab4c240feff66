use crate::layout::global_context::EditorContext;
use crate::layout::Shell;
use crate::shared::{config, storage};
use contracts::domain::a001_samplest::snapshot::{restore, RestoreOutcome};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn App() -> impl IntoView {
    let config = config::editor_config();

    // Restore memory state (if available)
    let saved = storage::load_snapshot(&config.storage.key);
    let (workspace, outcome) = restore(saved.as_deref(), &config.tabs);
    match outcome {
        RestoreOutcome::FirstVisit => log::info!("no saved workspace, starting fresh"),
        RestoreOutcome::Restored { tabs } => log::info!("restored {} tabs", tabs),
        RestoreOutcome::Recovered(_) => storage::discard_snapshot(&config.storage.key),
    }

    let ctx = EditorContext::new(workspace, config);
    provide_context(ctx);
    save_on_unload(ctx);

    view! {
        <Shell />
    }
}

/// Saves the workspace when the page is left and asks the browser to confirm.
///
/// Browsers may skip `beforeunload` entirely, so this is best-effort.
fn save_on_unload(ctx: EditorContext) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let message = ctx.config().storage.unload_message;

    let closure = Closure::wrap(Box::new(move |event: web_sys::BeforeUnloadEvent| {
        ctx.persist();
        event.prevent_default();
        event.set_return_value(&message);
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        window.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
    {
        log::error!("cannot register unload handler: {:?}", e);
    }
    // lives as long as the page
    closure.forget();
}
