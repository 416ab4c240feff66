use leptos::prelude::*;

/// Textarea holding a JSON document
///
/// The displayed text comes from the rendered view, which pretty-prints valid
/// JSON; `invalid` adds the `is-danger` marker.
#[component]
pub fn JsonTextarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Qualified field name, e.g. "request.headers"
    #[prop(into)]
    name: String,
    #[prop(into)]
    value: Signal<String>,
    /// Whether the current text failed to parse
    #[prop(into)]
    invalid: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_id = format!("field-{}", name.replace('.', "-"));
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(8);

    view! {
        <div class="form__group">
            {
                let textarea_id = textarea_id.clone();
                move || label.get().map(|l| view! {
                    <label class="form__label" for=textarea_id.clone()>
                        {l}
                    </label>
                })
            }
            <textarea
                id=textarea_id
                name=name
                class="form__textarea"
                class:is-danger=move || invalid.get()
                placeholder=textarea_placeholder
                rows=textarea_rows
                spellcheck="false"
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
