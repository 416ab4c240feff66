use super::optional_field::OptionalJsonField;
use crate::layout::global_context::use_editor;
use crate::shared::components::ui::{Input, Select};
use contracts::domain::a001_samplest::Control;
use leptos::prelude::*;

const METHODS: &[(&str, &str)] = &[
    ("get", "GET"),
    ("post", "POST"),
    ("put", "PUT"),
    ("patch", "PATCH"),
    ("delete", "DELETE"),
    ("head", "HEAD"),
    ("options", "OPTIONS"),
];

#[component]
pub fn RequestPanel() -> impl IntoView {
    let ctx = use_editor();
    let view_state = ctx.view;

    let text_of = move |name: &'static str| Signal::derive(move || view_state.with(|v| v.text(name)));
    let commit_text = move |name: &'static str| {
        Callback::new(move |text: String| {
            ctx.commit_control(
                name,
                Control {
                    text,
                    ..Control::default()
                },
            )
        })
    };

    view! {
        <div class="panel">
            <Input
                label="Route"
                name="request.route"
                value=text_of("request.route")
                on_change=commit_text("request.route")
                placeholder="/users/1"
            />
            <Select
                label="Method"
                name="request.method"
                value=text_of("request.method")
                on_change=commit_text("request.method")
                options=METHODS
            />
            <OptionalJsonField flag="_request.headers" field="request.headers" label="Headers" />
            <OptionalJsonField flag="_request.payload" field="request.payload" label="Payload" />
        </div>
    }
}
