use super::optional_field::OptionalJsonField;
use crate::layout::global_context::use_editor;
use crate::shared::components::ui::{Input, Radio};
use contracts::domain::a001_samplest::field::{CUSTOM_CHOICE, STATUS_CHOICES};
use contracts::domain::a001_samplest::Control;
use leptos::prelude::*;

const STATUS_FIELD: &str = "response.status";

#[component]
pub fn ResponsePanel() -> impl IntoView {
    let ctx = use_editor();
    let view_state = ctx.view;

    let selected = Signal::derive(move || {
        view_state.with(|v| v.control(STATUS_FIELD).and_then(|c| c.selected.clone()))
    });
    let custom = Signal::derive(move || {
        view_state.with(|v| v.control(STATUS_FIELD).map(|c| c.custom.clone()).unwrap_or_default())
    });
    let custom_text = Signal::derive(move || view_state.with(|v| v.text(STATUS_FIELD)));

    // picking the custom radio keeps whatever the free-text input holds; with
    // an empty input the stored status stays until a code is typed
    let on_pick = Callback::new(move |choice: String| {
        ctx.commit_control(
            STATUS_FIELD,
            Control {
                selected: Some(choice),
                custom: custom.get_untracked(),
                ..Control::default()
            },
        );
    });
    // editing the free-text input selects the custom radio
    let on_custom = Callback::new(move |text: String| {
        ctx.commit_control(
            STATUS_FIELD,
            Control {
                selected: Some(CUSTOM_CHOICE.to_string()),
                custom: text.clone(),
                text,
                ..Control::default()
            },
        );
    });

    view! {
        <div class="panel">
            <div class="form__group">
                <label class="form__label">"Status"</label>
                <div class="form__radio-group">
                    {STATUS_CHOICES
                        .iter()
                        .map(move |code| view! {
                            <Radio
                                label=code.to_string()
                                value=*code
                                checked_value=selected
                                on_change=on_pick
                                name=STATUS_FIELD
                            />
                        })
                        .collect_view()}
                    <Radio
                        label="Other".to_string()
                        value=CUSTOM_CHOICE
                        checked_value=selected
                        on_change=on_pick
                        name=STATUS_FIELD
                    />
                    <Input
                        id="status"
                        name=STATUS_FIELD
                        input_type="number"
                        value=custom_text
                        on_change=on_custom
                        placeholder="418"
                        class="form__input--status"
                    />
                </div>
            </div>
            <OptionalJsonField flag="_response.headers" field="response.headers" label="Headers" />
            <OptionalJsonField flag="_response.data" field="response.data" label="Data" />
        </div>
    }
}
