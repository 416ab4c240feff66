use leptos::prelude::*;

/// Select bound to one form field
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Qualified field name
    #[prop(into)]
    name: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: (value, label) pairs
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let select_id = format!("field-{}", name.replace('.', "-"));

    view! {
        <div class="form__group">
            {
                let select_id = select_id.clone();
                move || label.get().map(|l| view! {
                    <label class="form__label" for=select_id.clone()>
                        {l}
                    </label>
                })
            }
            <select
                id=select_id
                name=name
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .iter()
                    .map(|(val, label)| {
                        let is_selected = move || value.get() == *val;
                        view! {
                            <option value=*val selected=is_selected>
                                {*label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
