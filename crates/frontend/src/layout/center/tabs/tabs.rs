use crate::layout::center::tabs::tab::Tab;
use crate::layout::global_context::use_editor;
use crate::shared::dialogs;
use leptos::prelude::*;

/// Tab strip with the "create" affordance at its end.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_editor();

    let entries = move || {
        ctx.workspace.with(|ws| {
            ws.tabs()
                .iter()
                .map(|tab| (tab.id, tab.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    let on_create = move |_| {
        let Some(name) = dialogs::prompt("Create a new tab") else {
            return;
        };
        if let Err(e) = ctx.create_tab(&name) {
            dialogs::alert(&e.to_string());
        }
    };

    view! {
        <nav class="tabs">
            <ul>
                // keyed by name too, so a rename re-creates the label
                <For
                    each=entries
                    key=|(id, name)| (*id, name.clone())
                    children=move |(id, name)| view! { <Tab id=id name=name /> }
                />
                <li id="createNewTab" class="tab tab--create" title="Create a new tab" on:click=on_create>
                    <a>"+"</a>
                </li>
            </ul>
        </nav>
    }
}
