use leptos::prelude::*;

/// Radio button of a field group
#[component]
pub fn Radio(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Radio value
    #[prop(into)]
    value: String,
    /// Currently selected value of the group
    #[prop(into)]
    checked_value: Signal<Option<String>>,
    /// Fired with this radio's value when it gets selected
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (qualified field name of the group)
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let radio_id = format!("{}-{}", name.replace('.', "-"), value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    let is_checked = move || checked_value.get().as_deref() == Some(value_for_check.as_str());

    view! {
        <label class="form__radio-wrapper" for=radio_id.clone()>
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            <span class="form__radio-label">{label}</span>
        </label>
    }
}
