use leptos::prelude::*;

#[component]
pub fn ExceptionPanel() -> impl IntoView {
    view! {
        <div class="panel">
            <p class="panel__note">
                "Exception samples have no fields yet; they are left out of the archive."
            </p>
        </div>
    }
}
