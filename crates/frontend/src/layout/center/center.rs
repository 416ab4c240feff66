use crate::domain::a001_samplest::ui::SampleEditor;
use crate::layout::center::tabs::TabStrip;
use leptos::prelude::*;

#[component]
pub fn Center() -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabStrip />
            <SampleEditor />
        </div>
    }
}
