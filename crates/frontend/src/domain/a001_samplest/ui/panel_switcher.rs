use super::panel::Panel;
use crate::layout::global_context::use_editor;
use leptos::prelude::*;

#[component]
pub fn PanelSwitcher() -> impl IntoView {
    let ctx = use_editor();

    view! {
        <div class="panel-tabs">
            {Panel::all()
                .into_iter()
                .map(move |panel| {
                    let is_active = move || ctx.panel.get() == panel;
                    view! {
                        <a
                            data-panel=panel.as_str()
                            class:is-active=is_active
                            on:click=move |_| ctx.panel.set(panel)
                        >
                            {panel.display_name()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
