use crate::layout::global_context::use_editor;
use crate::shared::components::ui::{Checkbox, JsonTextarea};
use contracts::domain::a001_samplest::Control;
use leptos::prelude::*;

/// A JSON text area guarded by its optional-section flag.
///
/// The text area stays hidden while the flag is unchecked.
#[component]
pub fn OptionalJsonField(
    /// Flag field, e.g. "_request.headers"
    flag: &'static str,
    /// Guarded data field, e.g. "request.headers"
    field: &'static str,
    label: &'static str,
) -> impl IntoView {
    let ctx = use_editor();
    let view_state = ctx.view;

    let checked = Signal::derive(move || view_state.with(|v| v.checked(flag)));
    let visible = move || view_state.with(|v| v.adjacent_visible(flag));
    let text = Signal::derive(move || view_state.with(|v| v.text(field)));
    let invalid = Signal::derive(move || view_state.with(|v| v.invalid(field)));

    let on_toggle = Callback::new(move |checked: bool| {
        ctx.commit_control(
            flag,
            Control {
                checked,
                ..Control::default()
            },
        );
    });
    let on_edit = Callback::new(move |text: String| {
        ctx.commit_control(
            field,
            Control {
                text,
                ..Control::default()
            },
        );
    });

    view! {
        <div class="optional-field">
            <Checkbox
                label=format!("Include {}", label.to_lowercase())
                name=flag
                checked=checked
                on_change=on_toggle
            />
            <div class="optional-field__body" class:is-hidden=move || !visible()>
                <JsonTextarea
                    label=label
                    name=field
                    value=text
                    invalid=invalid
                    on_change=on_edit
                    placeholder="{}"
                />
            </div>
        </div>
    }
}
