pub mod exception_panel;
pub mod optional_field;
pub mod panel;
pub mod panel_switcher;
pub mod request_panel;
pub mod response_panel;

use crate::layout::global_context::use_editor;
use exception_panel::ExceptionPanel;
use leptos::prelude::*;
use panel::Panel;
use panel_switcher::PanelSwitcher;
use request_panel::RequestPanel;
use response_panel::ResponsePanel;

/// Form of the current tab, one panel at a time.
#[component]
pub fn SampleEditor() -> impl IntoView {
    let ctx = use_editor();
    let hidden = move |panel: Panel| move || ctx.panel.get() != panel;

    view! {
        <div class="sample-editor">
            <PanelSwitcher />
            <section data-panel-body=Panel::Request.as_str() class:is-hidden=hidden(Panel::Request)>
                <RequestPanel />
            </section>
            <section data-panel-body=Panel::Response.as_str() class:is-hidden=hidden(Panel::Response)>
                <ResponsePanel />
            </section>
            <section data-panel-body=Panel::Exception.as_str() class:is-hidden=hidden(Panel::Exception)>
                <ExceptionPanel />
            </section>
        </div>
    }
}
