pub mod center;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, archive download)        |
/// +------------------------------------------+
/// |  Tab strip                               |
/// |  Panel switcher                          |
/// |  Request / Response / Exception panel    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-main">
                <center::Center />
            </div>
        </div>
    }
}
