use leptos::prelude::*;

/// Checkbox for an optional-section flag
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Qualified field name, e.g. "_request.headers"
    #[prop(into)]
    name: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let checkbox_id = format!("field-{}", name.trim_start_matches('_').replace('.', "-flag-"));

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=checkbox_id.clone()
                name=name
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
