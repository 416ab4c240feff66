use crate::layout::global_context::use_editor;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_editor();
    let exporting = ctx.exporting;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Samplests"</span>
            </div>
            <div class="header__actions">
                <button
                    class="button button--primary"
                    disabled=move || exporting.get()
                    on:click=move |_| ctx.export()
                >
                    {move || if exporting.get() { "Preparing archive..." } else { "Download samples" }}
                </button>
            </div>
        </header>
    }
}
