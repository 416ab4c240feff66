use crate::layout::global_context::use_editor;
use crate::shared::dialogs;
use contracts::domain::a001_samplest::{TabId, WorkspaceError};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(id: TabId, name: String) -> impl IntoView {
    let ctx = use_editor();

    let is_active = Memo::new(move |_| ctx.workspace.with(|ws| ws.current() == Some(id)));

    let on_click = move |_| {
        if let Err(e) = ctx.activate_tab(id) {
            log::warn!("cannot activate tab: {}", e);
        }
    };

    let name_for_rename = name.clone();
    let on_rename = move |_| {
        let Some(new_name) = dialogs::prompt(&format!("Rename tab \"{}\"", name_for_rename)) else {
            return;
        };
        match ctx.rename_tab(id, &new_name) {
            Ok(_) => {}
            Err(WorkspaceError::DuplicateName(taken)) => dialogs::alert(&format!(
                "Another tab with the name \"{}\" already exists",
                taken
            )),
            Err(e) => log::warn!("cannot rename tab: {}", e),
        }
    };

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        if let Err(e) = ctx.close_tab(id) {
            log::warn!("cannot close tab: {}", e);
        }
    };

    view! {
        <li class="tab" class:active=is_active on:click=on_click on:dblclick=on_rename>
            <span class="tab__name">{name}</span>
            <a
                class="delete"
                title="Remove tab"
                on:click=on_close
                on:dblclick=|ev: ev::MouseEvent| ev.stop_propagation()
            ></a>
        </li>
    }
}
